//! Prompt assembly for each generation stage.
//!
//! The deterministic parts of the product live here: the strict audio mix,
//! the four-act structure with its duration targets, and the visual style
//! rules keyed off mood and discount language. Tests assert on these
//! strings, so changes here are behavior changes.

use adreel_core::{Analysis, Mood, Storyboard};

/// Fixed audio channel mix requested from every analysis.
pub const AUDIO_MIX: &str = "TTS: 100%, Music: 30%, SFX: 10%";

/// Style qualifier appended to every preview prompt.
pub const PREVIEW_QUALIFIER: &str = "professional product photography";

/// Prompt for the entity analysis stage.
pub fn analysis_prompt(text: &str) -> String {
    format!(
        "Act as a Senior Marketing AI Architect. Parse the following promotional text into a structured MVP technical plan.\n\
         Input Text: \"{text}\"\n\
         \n\
         Extraction Rules:\n\
         1. PRODUCT: Identify the main item/service.\n\
         2. FEATURES: Extract specific attributes (e.g., \"rasa coklat\").\n\
         3. TARGET_SITUATION: Identify the context/audience (e.g., \"sarapan cepat\").\n\
         4. CTA_INCENTIVE: Identify the action and deal (e.g., \"beli sekarang diskon 20%\").\n\
         \n\
         Analysis Rules:\n\
         - Determine 'marketingMood' based on keywords (e.g., 'Promo' -> 'Urgent', 'Health' -> 'Calm').\n\
         - Set 'suggestedAudioRatio' STRICTLY to \"{AUDIO_MIX}\" as per technical standard.\n\
         \n\
         Return JSON."
    )
}

/// Prompt for the storyboard expansion stage.
///
/// Requests exactly four scenes in HOOK/SOLUTION/BENEFIT/CTA order with
/// durations summing to roughly 25 seconds, and embeds the automated
/// visual style rules plus the brand color.
pub fn storyboard_prompt(analysis: &Analysis, brand_color: &str) -> String {
    format!(
        "Create a strict 4-scene storyboard for a 25-second promotional video (MVP Standard).\n\
         \n\
         Context:\n\
         - Product: {product}\n\
         - Features: {features}\n\
         - Target: {target}\n\
         - Mood: {mood}\n\
         - Brand Color: {brand_color}\n\
         \n\
         Structure (Must sum to approx 25s):\n\
         1. HOOK (Approx 5s): Visualizing the problem/need ({target}).\n\
         2. SOLUTION (Approx 7s): Introducing {product} clearly.\n\
         3. BENEFIT (Approx 8s): Visual proof of features ({features}).\n\
         4. CTA (Approx 5s): Final driver for '{cta}'.\n\
         \n\
         Visual Instruction Logic (Automated Rules):\n\
         - IF text implies \"Discount\", \"Sale\", \"Promo\" -> Visual Prompt MUST include \"flashing red overlay\" or \"dynamic pop-up text\".\n\
         - IF mood is \"Calm\" -> Visual Prompt MUST include \"soft lighting, slow cinematic pan\".\n\
         - IF mood is \"Urgent\" -> Visual Prompt MUST include \"fast cuts, bright saturation\".\n\
         - ALWAYS mention the Brand Color ({brand_color}) in the visual elements (e.g., props, background, or lighting).\n\
         \n\
         Return JSON Array.",
        product = analysis.product_name,
        features = analysis.features.join(", "),
        target = analysis.target_audience,
        mood = analysis.mood,
        cta = analysis.call_to_action,
    )
}

/// Composite prompt for one scene's preview still.
pub fn preview_prompt(visual_prompt: &str, mood: &Mood) -> String {
    format!("{visual_prompt}, style: {mood}, {PREVIEW_QUALIFIER}")
}

/// Composite prompt for the final video render.
///
/// Concatenates the scene visual prompts in ascending id order with the
/// mood, a smooth-transition instruction, and the brand color.
pub fn video_prompt(storyboard: &Storyboard, mood: &Mood, brand_color: &str) -> String {
    let mut prompt = format!("Create a cinematic {mood} commercial.\nSequence:\n");
    for scene in storyboard.scenes() {
        prompt.push_str(&format!("{}. {}\n", scene.id, scene.visual_prompt));
    }
    prompt.push_str(&format!(
        "Smooth transitions. Brand color theme: {brand_color}."
    ));
    prompt
}
