mod interface;
mod worker;
mod gui;

use eframe::egui;
use env_logger;
use gui::LedPanel;
use interface::LedPanelConfig;


fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

  let cfg : LedPanelConfig = match confy::load("led-panel", None) {
    Ok( cfg ) => cfg,
    Err( e ) => {
      log::error!("Failed to load configuration : {:?}. Using defaults.", e);
      LedPanelConfig::default()
    },
  };
  log::info!("Board endpoint is {}", cfg.endpoint.ws_url());

  let mut native_options = eframe::NativeOptions::default();
  native_options.initial_window_size = Some( egui::vec2(420.0, 260.0) );

  if let Err( e ) = eframe::run_native(
      "LED Panel",
      native_options,
      Box::new(|cc| Box::new(LedPanel::new(cc, cfg)) )
    )  {
    log::error!("Failed to run LED Panel {:?}", e);
  };
}
