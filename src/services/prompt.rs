//! Prompt construction
//!
//! Builds the instruction prompt sent to Gemini. The grading rubric is
//! part of the API contract: downstream consumers key off the output
//! field names it mandates, so its wording is carried over as-is.

use chrono::Local;

/// Grading rubric shared by the text and image prompts.
///
/// Mandates the `heading`/`percentage`/`brief_info`/`reasoning`/`sources`
/// output keys and the fixed ambiguous-input shape (`brief-info`,
/// percentage 0, heading "Ambiguous Search Query Result").
pub const ANALYSIS_RUBRIC: &str = r#"Prioritize highly reliable and authoritative sources for your analysis.

        If a source's reliability is questionable, factor that into your assessment.
        If the text provided to you is incomplete or you are unsure of the truth, use the given url to get the complete information of the provided selected text.

        If the provided text is not a statement, a question, or a coherent phrase that can be fact-checked, consider it a mistake from the user-end.
        In this case, you MUST respond ONLY with a JSON object explaining the issue
        (e.g., "The selected text is not a statement and cannot be analyzed.")
        and put it under the key "brief-info",
        "percentage" should be equal to 0,
        'heading' should be "Ambiguous Search Query Result",
        'reasoning' should empty,
        'sources' should be an empty list.'

        Otherwise, you MUST respond ONLY with a JSON object with the following keys:
        The JSON object must have the following keys:
        'heading' (a brief, neutral, descriptive title for the text being analyzed, max 10 words),
        'percentage' (an integer representing factual correctness from 0-100, search online(various other sites to analyze the correctness of the fact) and the provided url to get the percetage),
        'brief_info' (a very brief summary of the analysis based on your percentage of the score and other online sources,
        start like this 'According to my research, ...',
        max 2 sentences),
        'reasoning' (Based on the provided text, if the percentage shows that the given fact is the truth then provide a little more information other than whats in the provided text
        but if the provided text is false then search various other online sources for it and provide the corresponding truth,
        start your sentance by providing information on the news provider and the companies involved,
        max 2 sentences),
        and 'sources' (a list of all the URLs that you used to check the correctness of the text.
        provide all teh urls that you used to check the correctness of the text,
        do not use the same url as in the provided image or the text or the url.
        For each URL, include only those that are directly connected to the statement of the text provided so the users can verify your sources by themselves and
        ignore the ones which you used to learn about the topic in general.
        recheck the url multiple times to check if its working or not and also if its connent is directly related to the text provided by the user.

        )

        Do NOT include any other text or formatting outside the JSON object."#;

/// Current calendar date embedded in the prompt so the model can judge
/// source recency
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Build the text-analysis prompt
pub fn text_prompt(text: &str, url: &str, date: &str) -> String {
    format!(
        "You are an AI assistant that analyzes text for factual correctness. \n\n        \
         Today's date is {date}. Please use this information to provide the correct url in the source key of the json.\n        \
         {rubric}\n\n\nText to analyze:\n'{text}' found it on {url}\n",
        date = date,
        rubric = ANALYSIS_RUBRIC,
        text = text,
        url = url,
    )
}

/// Build the image-analysis prompt; the image itself travels as a
/// separate inline part
pub fn image_prompt(url: &str, date: &str) -> String {
    format!(
        "You are an AI assistant that analyzes images for factual correctness. \
         Analyze the content of the image and provide a factual correctness score. \n        \
         Today's date is {date}. Please use this information to provide the correct url in the source key of the json.\n        \
         {rubric}\n\n        The user found the image on {url}.\n",
        date = date,
        rubric = ANALYSIS_RUBRIC,
        url = url,
    )
}
