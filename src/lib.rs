#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![deny(clippy::use_self, rust_2018_idioms)]
#![allow(clippy::multiple_crate_versions, clippy::module_name_repetitions)]

use std::path::PathBuf;

use config::{Config, ConfigError};
use eframe::egui::{self, CentralPanel, Key, RichText};
use sound_edit::SoundEditor;
use sounds::SoundRegistry;

pub mod config;
pub mod counter;
pub mod playback;

/// implementation of the sound settings view for egui
pub mod sound_edit;
pub mod sounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum View {
    #[default]
    Main,
    Settings,
    SoundSettings,
}

/// The single-window "now serving" display. Holds the settings document
/// and drives every mutation from the main thread; only playback runs
/// off it.
pub struct ServingApp {
    pub(crate) config: Config,
    pub(crate) config_path: PathBuf,
    pub(crate) registry: SoundRegistry,
    pub(crate) view: View,
    pub(crate) editor: SoundEditor,
    pub(crate) save_error: Option<String>,
}

impl ServingApp {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_init(&config_path)?;
        let registry = SoundRegistry::new(Config::sounds_path()?)?;
        Ok(Self {
            config,
            config_path,
            registry,
            view: View::default(),
            editor: SoundEditor::default(),
            save_error: None,
        })
    }

    /// advance, persist, then fire the new number's clip if one is
    /// assigned and still on disk
    fn call_next_number(&mut self) {
        if let Some(number) = self.config.advance() {
            self.persist();
            if let Some(clip) = self.registry.lookup(&self.config, number) {
                playback::play(clip);
            }
        }
    }

    /// Writes the settings document. A failed save keeps the session
    /// alive but is logged and shown on the main display, since silently
    /// dropping it would defeat the point of persisting at all.
    pub(crate) fn persist(&mut self) {
        match self.config.save(&self.config_path) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                log::error!("couldn't save settings: {e}");
                self.save_error = Some(format!("couldn't save settings: {e}"));
            }
        }
    }

    fn render_main(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("Now Serving").size(24.0));
            ui.add_space(40.0);
            ui.label(
                RichText::new(format!("{:02}", self.config.current_number))
                    .size(120.0)
                    .strong(),
            );
            ui.add_space(40.0);
            ui.label("Press SPACE BAR to call next number");
            ui.add_space(20.0);
            if ui.button("Settings").clicked() {
                self.view = View::Settings;
            }
            if let Some(error) = &self.save_error {
                ui.add_space(10.0);
                ui.colored_label(egui::Color32::RED, error);
            }
        });
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("Settings").size(24.0));
            ui.add_space(20.0);
            if ui.button("Sound Settings").clicked() {
                self.view = View::SoundSettings;
            }
            ui.add_space(20.0);
            ui.group(|ui| {
                ui.label("Counter Settings");
                if ui.button("Reset Counter to 1").clicked() {
                    self.config.reset();
                    self.persist();
                    self.view = View::Main;
                }
            });
            ui.add_space(20.0);
            if ui.button("Back to Main Display").clicked() {
                self.view = View::Main;
            }
        });
    }
}

impl eframe::App for ServingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // space advances only on the main display, and never while a text
        // field owns the keyboard
        if self.view == View::Main
            && !ctx.wants_keyboard_input()
            && ctx.input(|i| i.key_pressed(Key::Space))
        {
            self.call_next_number();
        }
        CentralPanel::default().show(ctx, |ui| match self.view {
            View::Main => self.render_main(ui),
            View::Settings => self.render_settings(ui),
            View::SoundSettings => self.render_sound_settings(ui),
        });
    }
}
