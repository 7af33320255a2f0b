use async_graphql::MergedObject;

use crate::gql::domains::aeronaves::AeronaveMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(AeronaveMutation);
