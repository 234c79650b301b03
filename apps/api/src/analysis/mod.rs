// Résumé analysis: upload → extract → prompt → feedback.
// All inference goes through llm_client via the FeedbackGenerator seam.

pub mod extract;
pub mod feedback;
pub mod handlers;
pub mod prompts;
pub mod upload;
