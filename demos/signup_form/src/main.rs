//! Headless sign-up form: scripts a typing session against four validating
//! fields and logs validity, the aggregate flag and the painted scene.
//!
//! `signup-form [theme.json]`; run with `RUST_LOG=debug` for transitions.

mod app;
mod host;

use std::thread;
use std::time::Duration;

use anyhow::Context;
use valtext_core::SceneNode;
use valtext_ui::PresentationConfig;

use crate::app::{SignupField, SignupScreen};

fn load_theme() -> anyhow::Result<PresentationConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading theme {path}"))?;
            let theme = serde_json::from_str(&raw)
                .with_context(|| format!("parsing theme {path}"))?;
            log::info!("loaded theme from {path}");
            Ok(theme)
        }
        None => Ok(PresentationConfig::default()),
    }
}

fn settle(screen: &mut SignupScreen) {
    while screen.tick() {
        thread::sleep(Duration::from_millis(16));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let theme = load_theme()?;
    let mut screen = SignupScreen::new(&theme);

    let script = [
        (SignupField::Name, "ab"),
        (SignupField::Email, "ab@ab"),
        (SignupField::Password, "abc"),
        (SignupField::Password, "longenough1"),
        (SignupField::PasswordConfirm, "longenough1"),
        (SignupField::Name, "abcdef"),
        (SignupField::Email, "ab@abc.io"),
    ];
    for (field, text) in script {
        screen.type_into(field, text);
        settle(&mut screen);
        log::info!("all valid: {}", screen.form.all_valid());
    }

    let scene = screen.paint();
    for node in &scene.nodes {
        match node {
            SceneNode::Text { rect, text, .. } => {
                log::info!("text  {text:?} at ({}, {})", rect.x, rect.y)
            }
            SceneNode::Image { rect, image, .. } => {
                log::info!("image {image} at ({}, {})", rect.x, rect.y)
            }
            SceneNode::Rect { rect, color, .. } => {
                log::debug!("rect  {} at ({}, {})", color.to_hex(), rect.x, rect.y)
            }
        }
    }

    match screen.form.submit() {
        Some(entries) => log::info!("submitted {} fields", entries.len()),
        None => log::warn!("form not submittable"),
    }
    Ok(())
}
