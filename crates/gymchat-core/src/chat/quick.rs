//! Quick prompts: canned questions that submit exactly like typed input.

/// Prompts in display order.
pub const QUICK_PROMPTS: &[&str] = &[
    "Create a beginner workout plan for me",
    "How many calories should I eat to lose weight?",
    "Calculate my BMI",
    "What should I eat before a workout?",
    "How do I build a fitness profile?",
];

/// Look up a prompt by its 1-based number.
pub fn quick_prompt(number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|i| QUICK_PROMPTS.get(i).copied())
}
