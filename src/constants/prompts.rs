pub const QUESTION_GENERATOR_PROMPT: &str = r#"You are an expert {language} programmer. Your task is to write one question for "Snippet War", a game where players read a short code snippet and answer a question about it, usually predicting its output.

## QUESTION PARAMETERS

- Programming language: {language} (id: {language_id})
- Topic: {topic} (id: {topic_id})
- Difficulty: {difficulty} ({difficulty_description})
- Answer type: {answer_type}

## SNIPPET REQUIREMENTS

1. Write a short but readable code snippet (no more than 30 lines)
2. The snippet must demonstrate a concept from the topic above
3. The complexity must match the {difficulty} level
4. The snippet must be valid, runnable {language} code
5. The question must be interesting and educational

## ANSWER REQUIREMENTS

- For answer type "multiple_choice": write 4 options with exactly one correct option. Wrong options must be plausible. The "correct_answer" field MUST contain the EXACT TEXT of the correct option as it appears in "options", never its index.
- For answer type "free_text": give the exact correct answer in "correct_answer" and list other acceptable spellings (case, whitespace, formatting) in "acceptable_variants".

## OUTPUT FORMAT

Return exactly one JSON object with this shape:

{
  "code": "the {language} snippet",
  "question": "What does this code print?",
  "question_type": "{answer_type}",
  "options": ["option 1", "option 2", "option 3", "option 4"],
  "correct_answer": "exact text of the correct answer",
  "acceptable_variants": ["variant 1", "variant 2"],
  "case_sensitive": false,
  "explanation": "a detailed explanation of why the answer is correct and how the code works",
  "difficulty": "{difficulty}",
  "topic": "{topic_id}",
  "language": "{language_id}"
}

Field rules:
- "options": only for multiple_choice, between 2 and 5 entries
- "acceptable_variants" and "case_sensitive": only for free_text
- "difficulty", "topic" and "language" must repeat the parameter ids above exactly

## IMPORTANT

- Format the code properly
- Make the explanation clear and educational
- Beginner snippets should be simple; advanced snippets may rely on non-obvious language behavior
- Return only the JSON object: no markdown, no code fences, no text before or after it"#;
