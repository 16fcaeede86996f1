// src/noyau/repere.rs
//
// Repère caméra/écran
// -------------------
// Conventions:
// - domaine : y vers le HAUT, caméra = point du domaine au CENTRE de l’écran
// - écran   : y vers le BAS, origine en haut-gauche, unités en pixels
// - échelle : unités domaine PAR pixel, indépendante par axe
//
// vers_ecran:   sx = (x - cam.x)/éch.x + largeur/2
//               sy = (cam.y - y)/éch.y + hauteur/2
// vers_domaine: inverse algébrique exact (aller-retour = identité)

/// Point 2D (domaine OU écran selon le contexte).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vue figée pour UNE frame : caméra + échelle + taille du canevas.
/// Valeur explicite, reconstruite à chaque frame ; le noyau ne garde
/// aucun état de vue entre deux frames.
#[derive(Clone, Copy, Debug)]
pub struct Repere {
    pub camera: Point,
    pub echelle: Point,
    pub largeur: f64,
    pub hauteur: f64,
}

impl Repere {
    pub fn nouveau(camera: Point, echelle: Point, largeur: f64, hauteur: f64) -> Self {
        Self {
            camera,
            echelle,
            largeur,
            hauteur,
        }
    }

    /// Domaine -> pixels.
    pub fn vers_ecran(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.camera.x) / self.echelle.x + self.largeur / 2.0,
            y: (self.camera.y - p.y) / self.echelle.y + self.hauteur / 2.0,
        }
    }

    /// Pixels -> domaine.
    pub fn vers_domaine(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.largeur / 2.0) * self.echelle.x + self.camera.x,
            y: self.camera.y - (p.y - self.hauteur / 2.0) * self.echelle.y,
        }
    }
}

/* ------------------------ tests ------------------------ */
