// Profile PDF → HTML resume.
// Ingress writes the scratch upload, the extractor pulls page text, the generator
// prompts the model and checks its markup, the store keeps the current resume.
// All model calls go through llm_client.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod ingress;
pub mod pipeline;
pub mod prompts;
pub mod store;

#[cfg(test)]
pub mod test_support;
