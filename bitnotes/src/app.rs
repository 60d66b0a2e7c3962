//! Editor window: settings bar on top, line numbers beside the text area,
//! save status along the bottom.

use bitcore::browser::FileBrowser;
use bitcore::input::{self, Shortcut};
use bitcore::session::{SaveStatus, Session};
use bitcore::theme::{BitColors, BitTheme};
use bitcore::widgets::{line_gutter, status_bar, FileListItem};
use bitcore::{gutter, Config, FileType};
use egui::{Align2, Context};
use std::path::PathBuf;
use std::process::Child;

const EDITOR_ID: &str = "bitnotes_editor";

pub struct BitNotesApp {
    session: Session,
    file_browser: FileBrowser,
    show_file_browser: bool,
    windows: Vec<Child>,
}

/// Drop windows whose process has exited, collecting their exit status.
fn reap_exited(windows: &mut Vec<Child>) {
    windows.retain_mut(|child| match child.try_wait() {
        Ok(Some(status)) => {
            log::debug!("window (pid {}) closed: {}", child.id(), status);
            false
        }
        Ok(None) => true,
        Err(e) => {
            log::warn!("cannot poll window (pid {}): {}", child.id(), e);
            false
        }
    });
}

impl BitNotesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let file_browser = FileBrowser::new(config.home.clone());
        Self {
            session: Session::new(config),
            file_browser,
            show_file_browser: false,
            windows: Vec::new(),
        }
    }

    /// A new window is a new process with its own session.
    fn open_new_window(&mut self) {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                log::error!("cannot locate the BitNotes executable: {}", e);
                return;
            }
        };
        match std::process::Command::new(&exe).spawn() {
            Ok(child) => {
                log::info!("opened new window (pid {})", child.id());
                self.windows.push(child);
            }
            Err(e) => log::error!("failed to open a new window: {}", e),
        }
    }

    fn show_open_dialog(&mut self) {
        self.file_browser.refresh();
        self.show_file_browser = true;
    }

    fn open_file(&mut self, path: PathBuf) {
        self.show_file_browser = false;
        // failures are logged and queued as a notice by the session
        let _ = self.session.on_open(&path);
    }

    fn run(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::NewWindow => self.open_new_window(),
            Shortcut::Open => self.show_open_dialog(),
            Shortcut::Update => {
                self.session.on_update();
            }
        }
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        for shortcut in input::take_shortcuts(ctx) {
            self.run(shortcut);
        }
        let editor_focused = ctx.memory(|mem| mem.has_focus(egui::Id::new(EDITOR_ID)));
        if editor_focused {
            input::consume_tab_keys(ctx, self.session.document().tab_width() as usize);
        }
    }

    fn render_settings_bar(&mut self, ui: &mut egui::Ui) {
        BitTheme::settings_bar_frame().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.button(format!("New File ({})", Shortcut::NewWindow.hint())).clicked() {
                    self.run(Shortcut::NewWindow);
                }
                if ui.button(format!("Open File ({})", Shortcut::Open.hint())).clicked() {
                    self.run(Shortcut::Open);
                }

                ui.label("Tab Size");
                ui.add(egui::TextEdit::singleline(&mut self.session.fields.tab_width).desired_width(32.0));

                ui.label("File Name");
                ui.add(egui::TextEdit::singleline(&mut self.session.fields.name).desired_width(260.0));

                egui::ComboBox::from_id_source("file_type")
                    .selected_text(self.session.fields.file_type_label.clone())
                    .width(300.0)
                    .show_ui(ui, |ui| {
                        for file_type in FileType::ALL {
                            ui.selectable_value(
                                &mut self.session.fields.file_type_label,
                                file_type.label().to_string(),
                                file_type.label(),
                            );
                        }
                    });

                ui.label("Font Size");
                ui.add(egui::TextEdit::singleline(&mut self.session.fields.font_size).desired_width(32.0));

                if ui.button(format!("Update File ({})", Shortcut::Update.hint())).clicked() {
                    self.run(Shortcut::Update);
                }
            });
        });
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let font_size = self.session.document().font_size();
        let font = BitTheme::editor_font(font_size);
        let gutter_width = gutter::digits(self.session.document().line_count());
        let available = ui.available_size();
        let rows = (available.y / (font_size as f32 * 1.25)).max(4.0) as usize;

        // no soft wrapping, so gutter rows line up with text rows
        let mut layouter = |ui: &egui::Ui, text: &str, _wrap_width: f32| {
            let job = egui::text::LayoutJob::simple(
                text.to_owned(),
                font.clone(),
                BitColors::GREEN,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(job))
        };

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    line_gutter(ui, self.session.gutter(), font_size, gutter_width);

                    let output = egui::TextEdit::multiline(self.session.text_mut())
                        .id(egui::Id::new(EDITOR_ID))
                        .layouter(&mut layouter)
                        .desired_width(f32::INFINITY)
                        .desired_rows(rows)
                        .frame(false)
                        .show(ui);

                    if output.response.changed() {
                        self.session.on_text_changed();
                    }
                });
            });
    }

    fn status_text(&self) -> String {
        let save = match self.session.save_status() {
            SaveStatus::Idle => "not saved yet".to_string(),
            SaveStatus::Saved(path) => format!("saved to {}", path.display()),
            SaveStatus::Failed(message) => format!("save failed: {}", message),
        };
        format!("{} lines  |  {}", self.session.document().line_count(), save)
    }

    fn render_file_browser(&mut self, ctx: &Context) {
        egui::Window::new("open file")
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("location:");
                    ui.label(self.file_browser.current_dir.to_string_lossy().to_string());
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(260.0)
                    .show(ui, |ui| {
                        let entries = self.file_browser.entries.clone();
                        for (idx, entry) in entries.iter().enumerate() {
                            let selected = self.file_browser.selected_index == Some(idx);
                            let response = ui.add(
                                FileListItem::new(&entry.name, entry.is_directory).selected(selected),
                            );
                            if response.clicked() {
                                self.file_browser.selected_index = Some(idx);
                            }
                            if response.double_clicked() {
                                if entry.is_directory {
                                    self.file_browser.navigate_to(entry.path.clone());
                                } else {
                                    self.open_file(entry.path.clone());
                                }
                            }
                        }
                    });
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("cancel").clicked() {
                        self.show_file_browser = false;
                    }
                    if ui.button("open").clicked() {
                        if let Some(path) = self.file_browser.selected_file() {
                            self.open_file(path);
                        }
                    }
                });
            });
    }

    fn render_notice(&mut self, ctx: &Context) {
        let message = match self.session.peek_notice() {
            Some(message) => message.to_string(),
            None => return,
        };
        egui::Window::new("BitNotes")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.session.take_notice();
                    }
                });
            });
    }
}

impl eframe::App for BitNotesApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        reap_exited(&mut self.windows);
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("settings_bar").show(ctx, |ui| {
            self.render_settings_bar(ui);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar(ui, &self.status_text());
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BitColors::BLACK))
            .show(ctx, |ui| {
                self.render_editor(ui);
            });

        if self.show_file_browser {
            self.render_file_browser(ctx);
        }
        self.render_notice(ctx);
    }
}
