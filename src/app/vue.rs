// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Historique cliquable (rappel de l’expression)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Entrée :");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let libelle = self.mode.to_string();
                let resp = ui
                    .add_sized([56.0, 24.0], egui::Button::new(libelle))
                    .on_hover_text("Bascule degrés / radians");
                if resp.clicked() {
                    self.basculer_mode();
                }
            });
        });

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2(3+4), 50%, 5!, sin(90), 2π")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let apercu = self.apercu();
        if !apercu.is_empty() && apercu != self.entree.trim() {
            ui.weak(format!("Lu comme : {apercu}"));
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; AC = tout (sauf le mode)
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        // Fonctions + constantes
        ui.horizontal_wrapped(|ui| {
            for (label, texte) in [
                ("sin", "sin("),
                ("cos", "cos("),
                ("tan", "tan("),
                ("asin", "asin("),
                ("acos", "acos("),
                ("atan", "atan("),
                ("√", "sqrt("),
                ("ln", "ln("),
                ("log", "log("),
                ("π", "π"),
                ("e", "e"),
            ] {
                self.bouton_insert(ui, label, texte);
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        const LIGNES: [[&str; 5]; 4] = [
            ["7", "8", "9", "÷", "("],
            ["4", "5", "6", "×", ")"],
            ["1", "2", "3", "−", "^"],
            ["0", ".", "%", "+", "!"],
        ];

        egui::Grid::new("pave_numerique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for touche in ligne {
                        self.bouton_insert(ui, touche, touche);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        let eq = ui.add_sized([ui.available_width(), 36.0], egui::Button::new("="));
        if eq.clicked() {
            self.evaluer();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            let infobulle = match self.classe {
                Some(k) => format!("{k:?} : {}", self.detail),
                None => self.detail.clone(),
            };
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur)
                .on_hover_text(infobulle);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel = None;

        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("(vide)");
                }
                for (i, h) in self.historique.iter().enumerate() {
                    let ligne = format!("{} = {}   [{}]", h.expression, h.resultat, h.mode);
                    let label = egui::Label::new(egui::RichText::new(ligne).monospace())
                        .sense(egui::Sense::click());
                    if ui
                        .add(label)
                        .on_hover_text("Cliquer pour rappeler l’expression")
                        .clicked()
                    {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new(contenu).monospace().size(22.0));
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Backspace “intelligent” : retire d’un coup les motifs insérés par les boutons.
    fn backspace_entree(&mut self) {
        for pat in [
            "asin(", "acos(", "atan(", "sqrt(", "sin(", "cos(", "tan(", "ln(", "log(",
        ] {
            if self.entree.ends_with(pat) {
                self.entree.truncate(self.entree.len() - pat.len());
                return;
            }
        }
        self.entree.pop();
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
}
