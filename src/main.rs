// src/main.rs
//
// Calculatrice sûre — point d’entrée NATIF + WEB (WASM)
// -----------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//   (ou évaluation sans fenêtre : --eval "2(3+4)")
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice sûre";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;

    use crate::noyau::AngleMode;

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_sure")]
    #[command(about = "Calculatrice à liste blanche (aucun code utilisateur exécuté)", long_about = None)]
    #[command(version)]
    pub struct Cli {
        /// Mode d’angle initial : rad | deg
        #[arg(long, default_value = "rad")]
        pub mode: AngleMode,

        /// Évalue une expression, affiche le résultat et quitte (sans fenêtre)
        #[arg(long, value_name = "EXPR")]
        pub eval: Option<String>,

        /// Journalisation détaillée (debug)
        #[arg(short, long)]
        pub verbose: bool,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let defaut = if verbose { "debug" } else { "warn" };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    installer_journal(cli.verbose);

    if let Some(expr) = cli.eval {
        match noyau::evaluate(&expr, cli.mode) {
            Ok(v) => println!("{}", noyau::format(v)),
            Err(e) => {
                eprintln!("Erreur: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    tracing::info!(mode = %cli.mode, "démarrage de l’interface");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    let mode = cli.mode;
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(mode)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
