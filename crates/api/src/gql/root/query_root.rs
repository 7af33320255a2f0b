use async_graphql::MergedObject;

use crate::gql::domains::aeronaves::AeronaveQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(AeronaveQuery);
