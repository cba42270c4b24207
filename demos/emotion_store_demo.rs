//! Walks the custom-emotion lifecycle against a file-backed store: create,
//! save, list alongside the built-in catalog, edit, and delete.
//!
//! Run with: cargo run --example emotion_store_demo

use kimochi::prelude::*;

fn main() {
    env_logger::init();

    let dir = std::env::temp_dir().join("kimochi_store_demo");
    let mut store = CustomEmotionStore::new(FileBackend::new(&dir));
    println!("store directory: {}", dir.display());

    println!("\nbuilt-in catalog:");
    for emotion in catalog::predefined_emotions() {
        println!(
            "  {} {:<12} {:?} / {:?}",
            emotion.emoji.as_deref().unwrap_or(" "),
            emotion.name,
            emotion.animation_type,
            emotion.vibration_pattern,
        );
    }

    let mut cozy = Emotion::custom("Cozy", "☕")
        .color(Color::from_hex(0xB2DFDB))
        .secondary_color(Color::from_hex(0x80CBC4))
        .animation(AnimationType::Wave)
        .intensity(0.4);

    store.upsert(&cozy).expect("save failed");
    println!("\nsaved {} ({})", cozy.name, cozy.id);

    cozy.intensity = 0.6;
    store.upsert(&cozy).expect("save failed");

    println!("custom emotions on disk:");
    for emotion in store.list().expect("list failed") {
        println!(
            "  {} {:<12} intensity {:.1}, pulses: {:?}",
            emotion.emoji.as_deref().unwrap_or(" "),
            emotion.name,
            emotion.intensity,
            pulses_for(emotion.vibration_pattern),
        );
    }

    let removed = store.remove(&cozy.id).expect("remove failed");
    println!("\nremoved {}: {removed}", cozy.id);
}
