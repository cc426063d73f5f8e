//! The two fixed prompt templates sent to the model.
//!
//! Both are plain string formatting: deterministic, and the documentation and
//! implementation texts appear verbatim.

/// Build the compare-only prompt for one (documentation, implementation) pair.
#[must_use]
pub fn comparison_prompt(doc: &str, source: &str) -> String {
    format!(
        "You are an expert at software documentation consistency. Compare the following documentation and implementation content:

--- Documentation Content ---
{doc}

--- Implementation Content ---
{source}

Analyze the following:
    1. List any discrepancies in parameters (including naming conventions and missing parameters).
    2. Highlight new features or functionality in the implementation that is not documented.
    3. Suggest updates to the documentation for missing or inconsistent details, without mentioning error handling, repeating points or examples.
    4. Highlight any discrepancies between the documentation and the implementation.

Provide a concise and short comparison to the point.
"
    )
}

/// Build the update-in-place prompt for one (documentation, implementation) pair.
#[must_use]
pub fn update_prompt(doc: &str, source: &str) -> String {
    format!(
        "You are an expert at software documentation consistency. Update the documentation content to include the latest details from the implementation:

--- Existing Documentation Content ---
{doc}

--- Implementation Content ---
{source}

Update the documentation with:
    1. Missing or new features from the implementation.
    2. Correct parameter names and include missing ones, if any.
    3. Fix any inconsistencies without adding unnecessary information.

Provide the revised documentation content as a response.
"
    )
}
