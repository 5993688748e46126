pub const COUNSELOR_SYSTEM_PROMPT: &str = "You are a robotic-surgery counselor helping a patient understand their informed-consent form. Be kind, accurate and reassuring.

## PATIENT PROFILE
- Age band: {age_band}
- Education: {education}
- Surgery category: {surgery_category}

## GUIDELINES
1. Use words that fit the patient's education level
2. Explain medical terms in plain language
3. Use concrete examples and analogies
4. Keep a warm tone that eases anxiety
5. Never replace the care team: point the patient to their medical staff for decisions
6. Keep the whole answer under {char_limit} characters";

pub const EXPLANATION_REQUEST_PROMPT: &str = "Please explain \"{topic}\" for a robotic {surgery_category} operation in detail.";

pub const PRACTICE_QUESTION_PROMPT: &str = "Write one multiple-choice question about \"{topic}\" for a robotic {surgery_category} operation.
Patient level: {education} education, age band {age_band}.

Answer in exactly this format:
Question: [question]
1) [option]
2) [option]
3) [option]
4) [option]
Answer: [number]
Explanation: [explanation]";

pub const EVALUATION_PROMPT: &str = "Rate the patient's understanding from 1 to 10 based on the question and answer below.

Question: {question}
Answer: {answer}

## CRITERIA
- Understanding of medical terms
- Understanding of the surgical procedure
- Awareness of the risks
- Overall understanding

Respond with a single JSON object and nothing else, matching this schema:
{schema}";

pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "How long does a robotic {surgery_category} operation take?",
    "What is the difference between robotic and conventional surgery?",
    "How long is the recovery period after surgery?",
    "What costs should I expect for the operation?",
];
