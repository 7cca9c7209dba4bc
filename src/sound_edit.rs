use std::path::Path;

use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit};

use crate::{playback, sounds, ServingApp, View};

/// State of the sound settings view: the number the operator typed and
/// the inline message shown under the buttons.
#[derive(Default)]
pub struct SoundEditor {
    pub(crate) number_input: String,
    pub(crate) notice: Option<Notice>,
}

pub(crate) enum Notice {
    Error(String),
    Info(String),
}

impl ServingApp {
    pub(crate) fn render_sound_settings(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new("Sound Settings").size(24.0));
        });
        ui.add_space(20.0);
        ui.group(|ui| {
            ui.label("Number-Sound Mappings");
            ui.horizontal(|ui| {
                ui.label("Number:");
                ui.add(
                    TextEdit::singleline(&mut self.editor.number_input)
                        .desired_width(40.0)
                        .char_limit(2),
                );
            });
            if ui.button("Select Sound File").clicked() {
                self.assign_from_picker();
            }
            if ui.button("Test Current Number Sound").clicked() {
                self.test_current_sound();
            }
            match &self.editor.notice {
                Some(Notice::Error(message)) => {
                    ui.colored_label(Color32::RED, message);
                }
                Some(Notice::Info(message)) => {
                    ui.label(message);
                }
                None => {}
            }
            ScrollArea::vertical().show(ui, |ui| {
                for (number, clip) in self.registry.list(&self.config) {
                    ui.label(format!("Number {number}: {clip}"));
                }
            });
            if ui.button("Clear Selected Number Sound").clicked() {
                self.clear_current_sound();
            }
        });
        ui.add_space(20.0);
        if ui.button("Back to Settings").clicked() {
            self.view = View::Settings;
        }
    }

    /// The typed number, or `None` with the validation message shown
    /// inline. Nothing else happens on bad input.
    fn selected_number(&mut self) -> Option<u8> {
        match sounds::parse_number(&self.editor.number_input) {
            Ok(number) => Some(number),
            Err(e) => {
                self.editor.notice = Some(Notice::Error(e.to_string()));
                None
            }
        }
    }

    fn assign_from_picker(&mut self) {
        let Some(number) = self.selected_number() else {
            return;
        };
        let picker = rfd::FileDialog::new()
            .set_title("Pick a clip")
            .add_filter("Audio Files", &["mp3", "wav", "ogg", "m4a", "flac", "aac"]);
        let picker = match directories::UserDirs::new()
            .and_then(|dirs| dirs.audio_dir().map(Path::to_path_buf))
        {
            Some(audio_dir) => picker.set_directory(audio_dir),
            None => picker,
        };
        // cancelling the picker changes nothing
        let Some(clip) = picker.pick_file() else {
            return;
        };
        match self.registry.assign(&mut self.config, number, &clip) {
            Ok(_) => {
                self.persist();
                self.editor.notice = None;
            }
            Err(e) => self.editor.notice = Some(Notice::Error(e.to_string())),
        }
    }

    fn test_current_sound(&mut self) {
        let Some(number) = self.selected_number() else {
            return;
        };
        match self.registry.lookup(&self.config, number) {
            Some(clip) => {
                playback::play(clip);
                self.editor.notice = None;
            }
            None => {
                self.editor.notice =
                    Some(Notice::Info(format!("No sound assigned to number {number}")));
            }
        }
    }

    fn clear_current_sound(&mut self) {
        let Some(number) = self.selected_number() else {
            return;
        };
        match self.registry.clear(&mut self.config, number) {
            Ok(true) => {
                self.persist();
                self.editor.notice = None;
            }
            Ok(false) => self.editor.notice = None,
            Err(e) => self.editor.notice = Some(Notice::Error(e.to_string())),
        }
    }
}
