/// Build the instruction sent to the model.
///
/// The source language line is fixed; detection results never change it.
pub fn build_prompt(text: &str) -> String {
    format!(
        "\nTranslate the following text to English.\n\
         The text may be in Nepali or Sinhala.\n\
         Return ONLY the English translation.\n\
         \n\
         Text:\n\
         {}\n",
        text
    )
}
