// Resume enhancement: prompt building, model reply segmentation, JD keyword
// matching, before/after comparison and plain-text export.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod enhancer;
pub mod export;
pub mod handlers;
pub mod keyword_matcher;
pub mod original_bullets;
pub mod prompts;
pub mod segmenter;
