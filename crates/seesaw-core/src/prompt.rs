//! Prompt templates for the three generation calls of a See-Saw pass.

/// Prompt for generating a Main file from its description.
pub fn main_generation(description: &str) -> String {
    format!(
        "Generate the main file for the project:\n{description}\n\n\
         Do not include comments or explanations, and do not wrap the code \
         in triple backticks or any other delimiters. \
         Only return the raw code content."
    )
}

/// Prompt for generating a dependency file against the current main content.
pub fn dependency_generation(main_content: &str, dep_path: &str, dep_description: &str) -> String {
    format!(
        "This is the main code:\n\n{main_content}\n\n\
         Generate the dependency code for the file '{dep_path}':\n{dep_description}\n\n\
         Do not include comments or explanations. Only return the raw code content."
    )
}

/// Compatibility-check prompt. The expected response is the literal token
/// "True", or "False" followed immediately by corrected main-file source.
pub fn compatibility_check(
    main_content: &str,
    dependency_content: &str,
    original_description: &str,
) -> String {
    format!(
        "The following is the original project description:\n\n{original_description}\n\n\
         The following is the main code:\n\n{main_content}\n\n\
         The following is the dependency code:\n\n{dependency_content}\n\n\
         Check compatibility. Respond 'True' if compatible, or 'False' followed by the corrected main code. \
         Ensure that the corrected main code adheres strictly to the original project description. \
         Do not include comments or explanations, and do not wrap the code in triple backticks or any other delimiters. \
         Only return the raw code content."
    )
}
