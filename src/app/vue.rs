// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppTraceur (etat.rs) pour natif + wasm
// - Panneau gauche : cellules (la feuille) + qualité + aide
// - Canevas : quadrillage + courbes + points ; glisser = pan, molette = zoom
//
// Note :
// - Le noyau ne garde RIEN entre deux frames : à chaque update on rebâtit
//   un Repere depuis l’état et on ré-évalue la feuille entière.

use eframe::egui;

use super::etat::AppTraceur;
use crate::noyau::cadre::evaluer_cadre;
use crate::noyau::courbe::segments_finis;
use crate::noyau::repere::{Point, Repere};

/// Couleurs de tracé, attribuées par index de cellule (modulo).
const COULEURS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(0x66, 0xc2, 0xff), // bleu
    egui::Color32::from_rgb(0xff, 0xb0, 0x5c), // orange
    egui::Color32::from_rgb(0x7d, 0xd8, 0x7d), // vert
    egui::Color32::from_rgb(0xf2, 0x7d, 0xb2), // rose
    egui::Color32::from_rgb(0xe8, 0xe3, 0x6a), // jaune
    egui::Color32::from_rgb(0xb3, 0x8c, 0xff), // violet
];

fn couleur_cellule(i: usize) -> egui::Color32 {
    COULEURS[i % COULEURS.len()]
}

impl AppTraceur {
    /* ------------------------ panneau gauche ------------------------ */

    /// Panneau des cellules : à appeler depuis eframe::App::update(...)
    pub fn ui_panneau(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Traceur XY");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let resp = ui
                .add_sized([96.0, 28.0], egui::Button::new("Recentrer"))
                .on_hover_text("Caméra à l’origine, échelle par défaut (Échap)");
            if resp.clicked() {
                self.recentrer();
            }

            ui.separator();

            ui.label("Qualité :");
            let mut q = self.qualite as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut q)
                    .speed(4)
                    .range(16..=4000)
                    .suffix(" col."),
            );
            if resp.changed() {
                self.set_qualite(q as usize);
            }
        });

        ui.add_space(4.0);
        ui.separator();

        self.ui_cellules(ui);

        ui.add_space(8.0);
        self.ui_aide(ui);
    }

    fn ui_cellules(&mut self, ui: &mut egui::Ui) {
        // suppression différée : jamais pendant qu’on itère la feuille
        let mut a_supprimer: Option<usize> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height((ui.available_height() - 120.0).max(60.0))
            .show(ui, |ui| {
                for i in 0..self.cellules.len() {
                    ui.push_id(i, |ui| {
                        ui.horizontal(|ui| {
                            let erreur = self.cellules[i].erreur.clone();

                            let mut edit =
                                egui::TextEdit::singleline(&mut self.cellules[i].texte)
                                    .desired_width(ui.available_width() - 34.0)
                                    .hint_text("let a = 2 · plot(1, a) · graph(a*x)")
                                    .code_editor();
                            if erreur.is_some() {
                                edit = edit.text_color(ui.visuals().error_fg_color);
                            }

                            let mut resp = ui.add(edit);
                            if let Some(msg) = &erreur {
                                resp = resp.on_hover_text(msg.as_str());
                            }

                            if self.focus_cellule == Some(i) {
                                resp.request_focus();
                                self.focus_cellule = None;
                            }

                            let croix = ui
                                .add_sized([26.0, 22.0], egui::Button::new("✕"))
                                .on_hover_text("Supprime la cellule");
                            if croix.clicked() {
                                a_supprimer = Some(i);
                            }
                        });
                    });
                }

                let plus = ui.add_sized(
                    [ui.available_width(), 26.0],
                    egui::Button::new("+ cellule"),
                );
                if plus.clicked() {
                    self.ajouter_cellule();
                }
            });

        if let Some(i) = a_supprimer {
            self.supprimer_cellule(i);
        }
    }

    fn ui_aide(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Aide")
            .default_open(false)
            .show(ui, |ui| {
                ui.monospace("let a = 2");
                ui.label("définit a (nom d’un seul caractère)");
                ui.add_space(2.0);
                ui.monospace("plot(1, a)");
                ui.label("trace le point (1, a)");
                ui.add_space(2.0);
                ui.monospace("graph(a*x^2 - 1)");
                ui.label("trace la courbe y = f(x)");
                ui.add_space(6.0);
                ui.label("Multiplication implicite : 2x, (x)(y), 3(x+1).");
                ui.label("Glisser : déplacer la vue. Molette : zoom.");
                ui.label("Maj : zoom sur x seulement. Alt : zoom sur y seulement.");
            });
    }

    /* ------------------------ canevas ------------------------ */

    /// Canevas central : entrées pan/zoom, quadrillage, tracés.
    pub fn ui_canevas(&mut self, ui: &mut egui::Ui) {
        let taille = ui.available_size();
        let (resp, peintre) = ui.allocate_painter(taille, egui::Sense::click_and_drag());
        let rect = resp.rect;

        self.signaler_taille(rect.width(), rect.height());

        // --- entrées : glisser = pan ---
        if resp.dragged() {
            let d = resp.drag_delta();
            self.deplacer(d.x as f64, d.y as f64);
        }

        // --- entrées : molette = zoom (seulement si le canevas est survolé) ---
        if resp.hovered() {
            let defilement = ui.input(|i| i.raw_scroll_delta.y);
            if defilement != 0.0 {
                let (maj, alt) = ui.input(|i| (i.modifiers.shift, i.modifiers.alt));
                // molette vers le bas => recul ; Maj gèle y, Alt gèle x
                self.zoomer(defilement < 0.0, alt, maj);
            }
        }

        // --- repère de LA frame (valeur, pas d’état caché) ---
        let repere = Repere::nouveau(
            self.camera,
            self.echelle,
            rect.width() as f64,
            rect.height() as f64,
        );

        // fond + quadrillage
        peintre.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
        dessiner_quadrillage(&peintre, rect, &repere);

        // --- évaluation de la feuille, puis tracés ---
        let textes: Vec<&str> = self.cellules.iter().map(|c| c.texte.as_str()).collect();
        let sortie = evaluer_cadre(&textes, &repere, self.qualite);

        for courbe in &sortie.courbes {
            let couleur = couleur_cellule(courbe.cellule);
            for segment in segments_finis(&courbe.points) {
                if segment.len() < 2 {
                    continue;
                }
                let ligne: Vec<egui::Pos2> =
                    segment.iter().map(|p| en_pos2(rect, *p)).collect();
                peintre.add(egui::Shape::line(ligne, egui::Stroke::new(1.5, couleur)));
            }
        }

        for point in &sortie.points {
            let p = point.position;
            if !(p.x.is_finite() && p.y.is_finite()) {
                continue; // NaN/inf : pas de point, pas d’erreur
            }
            peintre.rect_filled(
                egui::Rect::from_center_size(en_pos2(rect, p), egui::vec2(6.0, 6.0)),
                0.0,
                couleur_cellule(point.cellule),
            );
        }

        // statuts -> cellules (le panneau les montrera à la frame suivante)
        self.appliquer_statuts(&sortie.statuts);
    }
}

/* ------------------------ dessin ------------------------ */

/// Pixels du repère (origine haut-gauche du canevas) -> Pos2 écran.
fn en_pos2(rect: egui::Rect, p: Point) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32)
}

/// Plus petite puissance de 10 >= minimum (minimum > 0).
fn pas_decimal(minimum: f64) -> f64 {
    10f64.powf(minimum.log10().ceil())
}

/// Quadrillage : lignes secondaires en gris sombre à pas décimal (10^n),
/// choisi pour garder au moins ~40 px entre deux lignes, puis les deux
/// axes par-dessus en gris moyen.
fn dessiner_quadrillage(peintre: &egui::Painter, rect: egui::Rect, repere: &Repere) {
    const GRIS_AXES: egui::Color32 = egui::Color32::from_rgb(128, 128, 128);
    const GRIS_LIGNES: egui::Color32 = egui::Color32::from_rgb(64, 64, 64);
    const ECART_MIN_PX: f64 = 40.0;
    const MAX_LIGNES: usize = 256; // garde-fou

    let trait_ligne = egui::Stroke::new(1.0, GRIS_LIGNES);
    let trait_axe = egui::Stroke::new(1.0, GRIS_AXES);

    // verticales (graduations en x)
    // SAFE: compteur en f64 + plafond MAX_LIGNES => ni débordement de cast,
    // ni boucle sans fin, même après un pan extrême
    let pas_x = pas_decimal(repere.echelle.x * ECART_MIN_PX);
    let x_min = repere.vers_domaine(Point::new(0.0, 0.0)).x;
    let x_max = repere.vers_domaine(Point::new(repere.largeur, 0.0)).x;
    let mut k = (x_min / pas_x).ceil();
    let k_fin = (x_max / pas_x).floor();
    let mut n = 0;
    while k <= k_fin && n < MAX_LIGNES {
        if k != 0.0 {
            let sx = repere.vers_ecran(Point::new(k * pas_x, 0.0)).x as f32;
            peintre.line_segment(
                [
                    egui::pos2(rect.min.x + sx, rect.min.y),
                    egui::pos2(rect.min.x + sx, rect.max.y),
                ],
                trait_ligne,
            );
        }
        k += 1.0;
        n += 1;
    }

    // horizontales (graduations en y)
    let pas_y = pas_decimal(repere.echelle.y * ECART_MIN_PX);
    let y_min = repere.vers_domaine(Point::new(0.0, repere.hauteur)).y;
    let y_max = repere.vers_domaine(Point::new(0.0, 0.0)).y;
    let mut k = (y_min / pas_y).ceil();
    let k_fin = (y_max / pas_y).floor();
    let mut n = 0;
    while k <= k_fin && n < MAX_LIGNES {
        if k != 0.0 {
            let sy = repere.vers_ecran(Point::new(0.0, k * pas_y)).y as f32;
            peintre.line_segment(
                [
                    egui::pos2(rect.min.x, rect.min.y + sy),
                    egui::pos2(rect.max.x, rect.min.y + sy),
                ],
                trait_ligne,
            );
        }
        k += 1.0;
        n += 1;
    }

    // axes par-dessus (x = 0 et y = 0)
    let origine = repere.vers_ecran(Point::new(0.0, 0.0));
    let sx = rect.min.x + origine.x as f32;
    let sy = rect.min.y + origine.y as f32;
    peintre.line_segment(
        [egui::pos2(sx, rect.min.y), egui::pos2(sx, rect.max.y)],
        trait_axe,
    );
    peintre.line_segment(
        [egui::pos2(rect.min.x, sy), egui::pos2(rect.max.x, sy)],
        trait_axe,
    );
}
