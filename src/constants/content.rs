use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct InfoPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

pub const INFO_PAGES: [InfoPage; 4] = [
    InfoPage {
        slug: "what-is-robotic-surgery",
        title: "What is robotic surgery?",
        summary: "In robotic surgery the medical team performs the operation by controlling robotic arms from a computer console. The da Vinci surgical robot is the most widely used system.",
        points: &[
            "The surgical site is magnified in high-definition 3D",
            "Precise robotic movements make delicate surgery possible",
            "The surgeon's hand tremor is filtered out automatically",
            "Surgery through minimal incisions",
        ],
    },
    InfoPage {
        slug: "advantages-and-disadvantages",
        title: "What happens in surgery?",
        summary: "Robotic surgery has clear benefits and some drawbacks worth discussing with your care team.",
        points: &[
            "Advantage: precision and stability",
            "Advantage: minimal incisions",
            "Advantage: faster recovery",
            "Advantage: less bleeding",
            "Advantage: lower infection risk",
            "Disadvantage: higher cost",
            "Disadvantage: dependence on equipment",
            "Disadvantage: the team needs specialised training",
            "Disadvantage: the operation may take longer",
        ],
    },
    InfoPage {
        slug: "surgical-process",
        title: "How is the operation carried out?",
        summary: "A robotic operation follows the same broad steps every time.",
        points: &[
            "Anaesthesia: general or spinal",
            "Positioning: you are placed in the right position for the operation",
            "Docking: the robotic arms are positioned over the surgical site",
            "Operation: the surgeon controls the robot from the console",
            "Completion: the robot is removed and the wounds are closed",
        ],
    },
    InfoPage {
        slug: "why-consent-matters",
        title: "Does the consent form matter?",
        summary: "The consent form records that you understood the operation and its risks before agreeing to it.",
        points: &[
            "Every operation carries risk",
            "Results can differ from person to person",
            "Complications after surgery are possible",
            "Talk things through with your care team",
        ],
    },
];

/// Consent-form sections a patient works through, also used as explanation topics.
pub const CONSENT_SECTIONS: [&str; 7] = [
    "Necessity and purpose of the surgery",
    "Surgical method and procedure",
    "Advantages and disadvantages of robotic surgery",
    "Expected complications and risks",
    "Alternative treatments",
    "Precautions after surgery",
    "Cost and insurance coverage",
];

/// Topics a practice question can be generated for.
pub const PRACTICE_TOPICS: [&str; 4] = [
    "Understanding of the surgical method",
    "Awareness of the risks",
    "Care after surgery",
    "Characteristics of robotic surgery",
];

pub const DISCLAIMER: &str = "This tool is for education only and does not replace your care team. Please ask your medical staff about anything you are unsure of.";
