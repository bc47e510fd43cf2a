pub fn build_system_prompt() -> String {
    let mut prompt =
        String::from("You are a Czech language expert helping a learner build flashcards.");
    prompt.push_str(" Provide information about Czech words in JSON format.");
    prompt
}

pub fn build_word_prompt(word: &str) -> String {
    let mut prompt = format!(
        "Analyze the Czech word \"{}\" and provide the following information in JSON format:\n",
        word
    );

    prompt.push_str("- word: the Czech word in its dictionary form\n");
    prompt.push_str(
        "- word_type: exactly one of \"noun\", \"verb\", \"adjective\", \"adverb\", \"other\"\n",
    );
    prompt.push_str(
        "- gender: for nouns only, \"ma\" (masculine animate), \"mi\" (masculine inanimate), \
         \"f\" (feminine) or \"n\" (neuter); null for every other word type\n",
    );
    prompt.push_str("- translation: the English translation of the word\n");
    prompt.push_str("- example: one simple Czech sentence using this word\n");

    prompt.push_str("\nRules:\n");
    prompt.push_str("1. For adjectives, use the masculine form.\n");
    prompt.push_str("2. If the word is not in nominative case, convert it to nominative.\n");
    prompt.push_str(
        "3. If the word is plural, convert it to singular unless it is normally used \
         only in plural (for example \"rovnatka\").\n",
    );
    prompt.push_str("4. Use \"other\" for prepositions, conjunctions, pronouns and the rest.\n");
    prompt.push_str("\nReturn ONLY a JSON object with exactly these five keys, nothing else.\n");

    prompt
}
