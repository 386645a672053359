// SPDX-License-Identifier: GPL-3.0-only

//! Textkey command-line evaluator.
//!
//! Loads a layout plus optional popup mappings and hint layouts, computes
//! every key for the requested context and prints the result as JSON.

use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::process;
use textkey::app_settings;
use textkey::config::{load_config, EngineConfig};
use textkey::evaluator::KeyboardContext;
use textkey::key::{KeyVariation, KeyboardMode, ShiftState, Subtype};
use textkey::keyboard::TextKeyboard;
use textkey::layout::{parse_layout_file, parse_popup_mapping_file, ParseError};
use textkey::popup::PopupMapping;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Character layout to compute
    #[arg(short, long)]
    layout: PathBuf,

    /// Popup mapping of the active subtype
    #[arg(short, long)]
    popups: Option<PathBuf>,

    /// Locale default popup mapping
    #[arg(long)]
    default_popups: Option<PathBuf>,

    /// Symbols layout providing symbol hints
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// Number-row layout providing number hints
    #[arg(long)]
    number_row: Option<PathBuf>,

    /// Engine configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keyboard mode, defaults to the layout's own mode
    #[arg(short, long)]
    mode: Option<KeyboardMode>,

    /// Text field variation
    #[arg(short, long, default_value_t = KeyVariation::Normal)]
    variation: KeyVariation,

    /// BCP-47 locale of the active subtype
    #[arg(long)]
    locale: Option<String>,

    /// Shift state
    #[arg(short, long, default_value_t = ShiftState::Unshifted)]
    shift_state: ShiftState,

    /// Number of enabled subtypes; the language switch key shows above one
    #[arg(long, default_value_t = 1)]
    subtype_count: usize,

    /// The editor has a selection (enables copy and cut)
    #[arg(long)]
    has_selection: bool,

    /// The clipboard holds data (enables paste)
    #[arg(long)]
    has_clipboard_data: bool,

    /// The field contains text (enables select all)
    #[arg(long)]
    has_text: bool,
}

fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = app_settings::DEFAULT_LOG_DIRECTIVE.parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ParseError> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    let layout = parse_layout_file(&cli.layout)?.into_layout();
    let symbols = cli.symbols.as_ref().map(|p| parse_layout_file(p)).transpose()?;
    let number_row = cli.number_row.as_ref().map(|p| parse_layout_file(p)).transpose()?;
    let popups = cli
        .popups
        .as_ref()
        .map(|p| parse_popup_mapping_file(p))
        .transpose()?;
    let default_popups = cli
        .default_popups
        .as_ref()
        .map(|p| parse_popup_mapping_file(p))
        .transpose()?;

    let subtype = Subtype::from_tag(0, &requested_locale(&cli, &config), layout.name.as_str())?;
    tracing::info!("Using locale {}", subtype.locale);

    let ctx = context(
        &cli,
        layout.mode,
        subtype,
        popups.map(|r| r.into_layout()),
        default_popups.map(|r| r.into_layout()),
    );

    let mut keyboard = TextKeyboard::from_layout(layout);
    keyboard.assign_hints(
        symbols.as_ref().map(|r| &r.layout),
        number_row.as_ref().map(|r| &r.layout),
    );
    keyboard.compute(&ctx);

    let rows: Vec<Vec<serde_json::Value>> = keyboard
        .arrangement
        .iter()
        .map(|row| {
            row.iter()
                .map(|key| {
                    let state = key.computed();
                    let popups = state.popups.popup_keys(&config.hints);
                    json!({
                        "label": state.data.label,
                        "code": state.data.code,
                        "enabled": state.is_enabled,
                        "visible": state.is_visible,
                        "flex": state.flex,
                        "popups": popups.labels(),
                    })
                })
                .collect()
        })
        .collect();

    let summary = json!({
        "name": keyboard.name,
        "mode": ctx.mode.to_string(),
        "variation": ctx.variation.to_string(),
        "rows": rows,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Builds the evaluation context from the command line.
fn context(
    cli: &Cli,
    layout_mode: KeyboardMode,
    subtype: Subtype,
    popups: Option<PopupMapping>,
    default_popups: Option<PopupMapping>,
) -> KeyboardContext {
    KeyboardContext {
        shift_state: cli.shift_state,
        subtype_count: cli.subtype_count,
        has_selection: cli.has_selection,
        has_clipboard_data: cli.has_clipboard_data,
        has_text: cli.has_text,
        ..KeyboardContext::new(cli.mode.unwrap_or(layout_mode))
            .with_variation(cli.variation)
            .with_subtype(subtype)
            .with_popup_mappings(popups, default_popups)
    }
}

/// Picks the locale from the command line, the desktop, or the configuration.
fn requested_locale(cli: &Cli, config: &EngineConfig) -> String {
    if let Some(locale) = &cli.locale {
        return locale.clone();
    }

    let requested = i18n_embed::DesktopLanguageRequester::requested_languages();
    match requested.first() {
        Some(language) => language.to_string(),
        None => config.default_locale.clone(),
    }
}
