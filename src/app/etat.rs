//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état du traceur (cellules, caméra, échelle, qualité)
//! et offrir des opérations simples (pan/zoom/recentrage) sans logique d’affichage.
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici (pas de parsing, pas d’échantillonnage).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la qualité et l’échelle.

use crate::noyau::repere::Point;

/// Nombre de colonnes échantillonnées par courbe, par défaut.
const QUALITE_DEFAUT: usize = 400;

/// Garde-fous : on borne la qualité (anti-abus / anti-gel).
const QUALITE_MIN: usize = 16;
const QUALITE_MAX: usize = 4000;

/// Échelle de départ : 0.01 unité domaine par pixel (les deux axes).
const ECHELLE_DEFAUT: f64 = 0.01;

/// Garde-fous : l’échelle reste finie et non nulle.
const ECHELLE_MIN: f64 = 1e-9;
const ECHELLE_MAX: f64 = 1e9;

/// Molette : un cran = ×1.5 (recul) ou ×2/3 (rapprochement).
const FACTEUR_ZOOM: f64 = 1.5;

/// Une cellule de la feuille : son texte et, après évaluation,
/// son éventuel message d’erreur (None = cellule saine).
#[derive(Clone, Default, Debug)]
pub struct Cellule {
    pub texte: String,
    pub erreur: Option<String>,
}

impl Cellule {
    pub fn nouvelle(texte: &str) -> Self {
        Self {
            texte: texte.to_string(),
            erreur: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppTraceur {
    // --- feuille de cellules ---
    pub cellules: Vec<Cellule>,

    // --- vue (caméra au centre de l’écran, échelle par axe) ---
    pub camera: Point,
    pub echelle: Point,

    // --- paramètres ---
    pub qualite: usize, // colonnes par courbe

    // --- UX ---
    // Permet à vue.rs de donner le focus à une cellule après ajout.
    pub focus_cellule: Option<usize>,

    // Dernière taille connue du canevas (journalisation des resize).
    pub taille_canevas: (f32, f32),
}

impl Default for AppTraceur {
    fn default() -> Self {
        Self {
            // Feuille d’accueil : une définition, une courbe, un point.
            cellules: vec![
                Cellule::nouvelle("let a = 2"),
                Cellule::nouvelle("graph(a*x^2 - 1)"),
                Cellule::nouvelle("plot(1, a)"),
            ],
            camera: Point::new(0.0, 0.0),
            echelle: Point::new(ECHELLE_DEFAUT, ECHELLE_DEFAUT),
            qualite: QUALITE_DEFAUT,
            focus_cellule: Some(0), // au lancement, on veut pouvoir taper tout de suite
            taille_canevas: (0.0, 0.0),
        }
    }
}

impl AppTraceur {
    /* ------------------------ Actions “feuille” (état seulement) ------------------------ */

    /// Ajoute une cellule vide en fin de feuille et lui donne le focus.
    pub fn ajouter_cellule(&mut self) {
        self.cellules.push(Cellule::default());
        self.focus_cellule = Some(self.cellules.len() - 1);
    }

    /// Supprime la cellule d’index `i` (no-op si l’index est hors feuille).
    pub fn supprimer_cellule(&mut self, i: usize) {
        if i < self.cellules.len() {
            self.cellules.remove(i);
            self.focus_cellule = None;
        }
    }

    /// Dépose les statuts d’évaluation (un par cellule, même ordre).
    pub fn appliquer_statuts(&mut self, statuts: &[Option<String>]) {
        for (cellule, statut) in self.cellules.iter_mut().zip(statuts) {
            cellule.erreur = statut.clone();
        }
    }

    /* ------------------------ Actions “vue” (état seulement) ------------------------ */

    /// Recadre la vue : caméra à l’origine, échelle par défaut.
    pub fn recentrer(&mut self) {
        self.camera = Point::new(0.0, 0.0);
        self.echelle = Point::new(ECHELLE_DEFAUT, ECHELLE_DEFAUT);
        log::debug!("vue recentrée");
    }

    /// Pan : déplacement souris (dx, dy) en pixels => caméra en unités domaine.
    pub fn deplacer(&mut self, dx: f64, dy: f64) {
        self.camera.x -= dx * self.echelle.x;
        self.camera.y += dy * self.echelle.y;
        log::debug!("caméra: ({}, {})", self.camera.x, self.camera.y);
    }

    /// Zoom molette. `recul` = true éloigne (échelle ×1.5), false rapproche (×2/3).
    /// `geler_x` / `geler_y` (Alt / Maj) : l’axe gelé garde son échelle.
    pub fn zoomer(&mut self, recul: bool, geler_x: bool, geler_y: bool) {
        let facteur = if recul {
            FACTEUR_ZOOM
        } else {
            1.0 / FACTEUR_ZOOM
        };

        if !geler_y {
            self.echelle.y = (self.echelle.y * facteur).clamp(ECHELLE_MIN, ECHELLE_MAX);
        }
        if !geler_x {
            self.echelle.x = (self.echelle.x * facteur).clamp(ECHELLE_MIN, ECHELLE_MAX);
        }
        log::debug!("échelle: ({}, {})", self.echelle.x, self.echelle.y);
    }

    /// Garde-fou : limite la qualité (évite abus / gel plus tard).
    pub fn set_qualite(&mut self, qualite: usize) {
        self.qualite = qualite.clamp(QUALITE_MIN, QUALITE_MAX);
    }

    /// Mémorise la taille du canevas, journalise quand elle change.
    pub fn signaler_taille(&mut self, largeur: f32, hauteur: f32) {
        if self.taille_canevas != (largeur, hauteur) {
            self.taille_canevas = (largeur, hauteur);
            log::debug!("canevas: {largeur}x{hauteur}");
        }
    }
}
