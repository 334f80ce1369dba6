//! Wizard command handlers.

use super::commands::OutputFormat;
use adreel::{
    Analysis, BrandKit, GeminiGenerator, GenerationClient, MediaRef, Session, Storyboard,
    StoryboardPipeline,
};
use std::path::Path;

/// Run entity analysis over marketing copy and print the result.
pub async fn run_analyze(
    text: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = GeminiGenerator::new()?;
    let analysis = client.analyze(text).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        OutputFormat::Human => {
            print_analysis(&analysis);
        }
    }
    Ok(())
}

/// Run analysis plus storyboard expansion and print both.
pub async fn run_storyboard(
    text: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = GeminiGenerator::new()?;
    let pipeline = StoryboardPipeline::new(client, BrandKit::default());
    pipeline.start(text, BrandKit::default()).await?;

    let session = pipeline.store().snapshot();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        OutputFormat::Human => {
            if let Some(analysis) = session.analysis.as_ref() {
                print_analysis(analysis);
            }
            if let Some(storyboard) = session.storyboard.as_ref() {
                print_storyboard(storyboard);
            }
        }
    }
    Ok(())
}

/// Run the full wizard: analysis, storyboard, previews, optional video.
pub async fn run_generate(
    text: &str,
    render: bool,
    out: Option<&Path>,
    brand: BrandKit,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = GeminiGenerator::new()?;
    let pipeline = StoryboardPipeline::new(client, brand.clone());

    pipeline.start(text, brand).await?;
    let session = pipeline.store().snapshot();
    if let Some(analysis) = session.analysis.as_ref() {
        print_analysis(analysis);
    }

    println!("Synthesizing scene previews...");
    pipeline.fill_previews().await?;

    let session = pipeline.store().snapshot();
    if let Some(storyboard) = session.storyboard.as_ref() {
        print_storyboard(storyboard);
        save_previews(storyboard, out)?;
    }

    if render {
        println!("Rendering video (this can take a few minutes)...");
        pipeline.render_video().await?;
        let session = pipeline.store().snapshot();
        save_video(&session, out)?;
    }

    Ok(())
}

/// Print an entity analysis in human-readable form.
fn print_analysis(analysis: &Analysis) {
    println!("Product:  {}", analysis.product_name);
    println!("Features: {}", analysis.features.join(", "));
    println!("Target:   {}", analysis.target_audience);
    println!("CTA:      {}", analysis.call_to_action);
    println!("Mood:     {}", analysis.mood);
    println!("Audio:    {}", analysis.audio_mix);
}

/// Print the scene table for a storyboard.
fn print_storyboard(storyboard: &Storyboard) {
    println!("{:-<72}", "");
    println!("{:<4} {:<10} {:>5}  NARRATIVE", "ID", "TYPE", "SECS");
    println!("{:-<72}", "");
    for scene in storyboard.scenes() {
        println!(
            "{:<4} {:<10} {:>5.1}  {}",
            scene.id, scene.kind, scene.duration_secs, scene.narrative
        );
        println!("     visual: {}", scene.visual_prompt);
        println!("     camera: {}", scene.camera_angle);
    }
    println!("{:-<72}", "");
    println!("Total: {:.0}s", storyboard.total_duration_secs());
}

/// Save or report each scene preview.
fn save_previews(
    storyboard: &Storyboard,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = out {
        std::fs::create_dir_all(dir)?;
    }
    for scene in storyboard.scenes() {
        let Some(preview) = scene.preview.as_ref() else {
            continue;
        };
        match (preview, out) {
            (MediaRef::Inline { mime, data }, Some(dir)) => {
                let path = dir.join(format!("scene_{}_preview.{}", scene.id, extension_for(mime)));
                std::fs::write(&path, data)?;
                println!("Scene {} preview: {}", scene.id, path.display());
            }
            (MediaRef::Inline { data, .. }, None) => {
                println!(
                    "Scene {} preview: inline image ({} bytes)",
                    scene.id,
                    data.len()
                );
            }
            (MediaRef::Url(url), _) => {
                println!("Scene {} preview: {}", scene.id, url);
            }
        }
    }
    Ok(())
}

/// Save or report the finished video asset.
fn save_video(session: &Session, out: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(video) = session.video.video.as_ref() else {
        return Ok(());
    };
    match (video, out) {
        (MediaRef::Inline { mime, data }, Some(dir)) => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(format!("promo.{}", extension_for(mime)));
            std::fs::write(&path, data)?;
            println!("Video: {}", path.display());
        }
        (MediaRef::Inline { data, .. }, None) => {
            println!("Video: inline asset ({} bytes)", data.len());
        }
        (MediaRef::Url(url), _) => {
            println!("Video: {}", url);
        }
    }
    Ok(())
}

/// File extension for a media MIME type.
fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "video/mp4" => "mp4",
        _ => "png",
    }
}
