use crate::models::domain::{Question, Section};

const SECTION_PROCEDURE: &str = "I. Purpose and process of surgery (4 questions)";
const SECTION_RISKS: &str = "II. Surgical risks, complications and care (4 questions)";
const SECTION_SELF_DETERMINATION: &str = "III. Self-determination (2 questions)";

struct Item {
    number: usize,
    text: &'static str,
    options: &'static [&'static str],
    correct: usize,
    explanation: &'static str,
}

const ITEMS: [Item; 10] = [
    Item {
        number: 1,
        text: "1. Which of the following is NOT an advantage of robot-assisted surgery?",
        options: &[
            "Smaller incisions may allow a faster recovery",
            "The robotic arms allow precise manipulation",
            "The robot makes its own decisions and carries out the operation autonomously",
            "The risk of bleeding and infection may be reduced",
        ],
        correct: 2,
        explanation: "In robotic surgery the surgeon controls the robotic arms from a console. The robot does not decide or operate on its own.",
    },
    Item {
        number: 2,
        text: "2. How many incisions of about 2 cm are made at the surgical site?",
        options: &["1 to 2", "2 to 3", "3 to 5", "5 to 7"],
        correct: 2,
        explanation: "Robotic surgery usually uses 3 to 5 small incisions to insert the robotic arms and the camera.",
    },
    Item {
        number: 3,
        text: "3. How does the surgeon perform robot-assisted surgery?",
        options: &[
            "The robot operates automatically and the surgeon only monitors",
            "The surgeon handles the instruments directly by hand",
            "The surgeon remotely controls the robotic arms through a console",
            "An AI analyses the surgical plan and operates autonomously",
        ],
        correct: 2,
        explanation: "The surgeon sits at a console, watches a 3D image and controls the robotic arms remotely.",
    },
    Item {
        number: 4,
        text: "4. Which situation would NOT lead to converting robotic surgery into open surgery?",
        options: &[
            "Severe adhesions, where the intestines are stuck together",
            "Heavy bleeding",
            "A mass that may be cancer and needs closer examination",
            "The robotic arm reaching deep inside the body",
        ],
        correct: 3,
        explanation: "The robotic arm reaching deep areas is a normal part of the operation. Adhesions, bleeding or suspected cancer can require conversion to open surgery.",
    },
    Item {
        number: 5,
        text: "5. What side effect can occur after lymph nodes are removed during robotic surgery?",
        options: &[
            "Raised blood pressure",
            "Swelling caused by trapped lymph fluid",
            "Heart palpitations",
            "Blurred vision",
        ],
        correct: 1,
        explanation: "Removing lymph nodes can block the flow of lymph fluid and cause swelling. This is an expected post-operative effect.",
    },
    Item {
        number: 6,
        text: "6. What helps prevent lung problems after surgery?",
        options: &[
            "Lying still without moving",
            "Talking little and staying quiet",
            "Deep-breathing exercises and moving a little, often",
            "Shallow, rapid breathing exercises",
        ],
        correct: 2,
        explanation: "Deep-breathing exercises and early walking are the best ways to prevent lung complications.",
    },
    Item {
        number: 7,
        text: "7. What can happen when you receive a patient-controlled pain injection?",
        options: &[
            "You may feel nauseous and dizzy",
            "You suddenly start sweating",
            "Your stomach hurts and your hands shake",
            "You cannot stop coughing",
        ],
        correct: 0,
        explanation: "Nausea or dizziness can follow a pain-control injection. This is a normal reaction.",
    },
    Item {
        number: 8,
        text: "8. Intestines sticking together is called an adhesion. How can adhesions be prevented?",
        options: &[
            "Lie still",
            "Start walking the day after surgery",
            "Eat nothing at all",
            "Exercise while pressing on the abdomen",
        ],
        correct: 1,
        explanation: "Walking early stimulates bowel movement and helps prevent adhesions.",
    },
    Item {
        number: 9,
        text: "9. Who makes the final decision about surgery?",
        options: &["The doctor", "The family", "The patient"],
        correct: 2,
        explanation: "The patient makes the final decision. The doctor informs and recommends, but the choice is the patient's right.",
    },
    Item {
        number: 10,
        text: "10. Which of the following is NOT part of self-determination?",
        options: &[
            "Agreeing after hearing the explanation",
            "Leaving everything to the medical staff because I don't understand",
            "Being aware of possible side effects",
            "Being able to withdraw consent at any time",
        ],
        correct: 0,
        explanation: "Self-determination means deciding for yourself based on enough information. Leaving it to the medical staff because you don't understand is not self-determination.",
    },
];

/// Question numbers per section, in catalog order.
const LAYOUT: [(&str, std::ops::RangeInclusive<usize>); 3] = [
    (SECTION_PROCEDURE, 1..=4),
    (SECTION_RISKS, 5..=8),
    (SECTION_SELF_DETERMINATION, 9..=10),
];

pub const PRE_QUESTION_PREFIX: &str = "q";
pub const POST_QUESTION_PREFIX: &str = "pq";

fn build(prefix: &str, with_explanations: bool) -> Vec<Section> {
    LAYOUT
        .iter()
        .map(|(title, numbers)| {
            let questions = ITEMS
                .iter()
                .filter(|item| numbers.contains(&item.number))
                .map(|item| {
                    let question = Question::new(
                        &format!("{}{}", prefix, item.number),
                        item.text,
                        item.options,
                        item.correct,
                    );
                    if with_explanations {
                        question.with_explanation(item.explanation)
                    } else {
                        question
                    }
                })
                .collect();
            Section::new(title, questions)
        })
        .collect()
}

pub fn pre_quiz_sections() -> Vec<Section> {
    build(PRE_QUESTION_PREFIX, false)
}

pub fn post_quiz_sections() -> Vec<Section> {
    build(POST_QUESTION_PREFIX, true)
}
