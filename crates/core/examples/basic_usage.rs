//! Basic usage example of the textdiffer library
//!
//! Run with `RUST_LOG=debug` to see the engine's tracing output.

use textdiffer_core::{
    compute_diff, DiffConfig, DiffEngine, DiffOptions, DiffView, HtmlRenderer,
    InlineMarkupRenderer, Renderer,
};
use tracing_subscriber::EnvFilter;

const LINE: &str = "----------------------------------------";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Text Differ Examples ===\n");

    example_simple_diff();
    example_rendering();
    example_options();
    example_fallback();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "Summarize the article in three sentences.";
    let modified = "Summarize the article in two short sentences.";

    let result = compute_diff(original, modified);

    println!("Original: {}", original);
    println!("Modified: {}", modified);
    println!("\n{}", result.summary());
    println!("\nSegments:");
    for (i, segment) in result.changed_segments().iter().enumerate() {
        println!("  {}. {}", i + 1, segment.description());
    }
    println!("\n");
}

fn example_rendering() {
    println!("Example 2: Rendering");
    println!("{}", LINE);

    let engine = DiffEngine::new(DiffConfig::display());
    let view = DiffView::build(
        &engine,
        "You are a helpful assistant.",
        "You are a concise, helpful assistant.",
    );

    println!("Inline: {}", view.render(&InlineMarkupRenderer::new()));
    println!(
        "HTML:   {}",
        view.render(&HtmlRenderer::new().with_class_prefix("diff"))
    );
    println!("\n");
}

fn example_options() {
    println!("Example 3: Options from JSON");
    println!("{}", LINE);

    let options = match DiffOptions::from_json(r#"{"granularity": "character", "coalesce": true}"#) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("bad options: {}", err);
            return;
        }
    };
    let engine = DiffEngine::new(options.into_config());
    let result = engine.diff("color", "colour");

    println!("{}", InlineMarkupRenderer::new().render(&result.segments));
    println!("\n");
}

fn example_fallback() {
    println!("Example 4: Fallback for oversized input");
    println!("{}", LINE);

    let engine = DiffEngine::new(DiffConfig::new().with_max_tokens(3));
    let view = DiffView::build(&engine, "far too many words here", "far too many");

    if let DiffView::Unavailable { reason, .. } = &view {
        println!("Diff unavailable: {}", reason);
    }
    println!("{}", view.render(&InlineMarkupRenderer::new()));
}
