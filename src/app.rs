// src/app.rs
//
// Traceur XY — module App (racine)
// --------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppTraceur (pour main.rs: use crate::app::AppTraceur;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le pan/zoom est géré dans vue.rs (au bon endroit: quand le canevas a
//   le survol/drag). Ici, raccourcis globaux seulement.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppTraceur;`
pub use etat::AppTraceur;

use eframe::egui;

impl eframe::App for AppTraceur {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = recadrer la vue sur l’origine (caméra + échelle par défaut).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.recentrer(); // méthode publique de etat.rs
        }

        egui::SidePanel::left("panneau_cellules")
            .resizable(true)
            .default_width(300.0)
            .min_width(220.0)
            .show(ctx, |ui| {
                self.ui_panneau(ui); // méthode publique (dans vue.rs)
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_canevas(ui); // méthode publique (dans vue.rs)
        });

        // Boucle continue: la feuille est ré-évaluée à chaque frame,
        // comme une animation canvas (requestAnimationFrame).
        ctx.request_repaint();
    }
}
