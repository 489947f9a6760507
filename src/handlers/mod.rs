/// Runs the validators and shapes their verdicts into response payloads.
///
/// Shared by the REST routes and the GraphQL resolvers so both interfaces
/// always agree on the result for the same input.
pub mod validation;
