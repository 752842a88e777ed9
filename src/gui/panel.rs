use crate::egui::Color32; // b/c of re-export
use log;

use crate::interface::{BoardEvent, ConnectionPhase, LedCommand};
use super::texts::Texts;

pub const OK_COLOR : Color32 = Color32::GREEN;
pub const WARN_COLOR : Color32 = Color32::from_rgb(255, 165, 0);
pub const DOWN_COLOR : Color32 = Color32::RED;

pub struct PanelState {
  led_is_on : bool,
  phase : ConnectionPhase,
  status_text : String,
  status_color : Color32,
  texts : Texts,
}

impl PanelState {
  pub fn new(texts : Texts) -> Self {
    let status_text = texts.disconnected().to_string();

    PanelState {
      led_is_on : false,
      phase : ConnectionPhase::Connecting,
      status_text,
      status_color : DOWN_COLOR,
      texts,
    }
  }

  pub fn is_connected(&self) -> bool {
    self.phase == ConnectionPhase::Open
  }

  pub fn led_is_on(&self) -> bool {
    self.led_is_on
  }

  pub fn button_text(&self) -> &'static str {
    if self.led_is_on { "ON" } else { "OFF" }
  }

  pub fn status_text(&self) -> &str {
    &self.status_text
  }

  pub fn status_color(&self) -> Color32 {
    self.status_color
  }

  pub fn apply_event(&mut self, event : BoardEvent) {
    match event {
      BoardEvent::Opened => {
        self.phase = ConnectionPhase::Open;
        self.set_status(self.texts.connected(), OK_COLOR);
      },
      BoardEvent::MessageReceived( text ) => self.process_message( text ),
      BoardEvent::TransportError( e ) => {
        log::error!("Error in WebSocket connection : {}", e);
        self.set_status(self.texts.connection_error(), WARN_COLOR);
      },
      BoardEvent::Closed { code, reason } => {
        log::warn!("Connection closed : {} Reason : {}", code, reason);
        self.phase = ConnectionPhase::Closed;
        self.set_status(self.texts.connection_closed(), DOWN_COLOR);
      },
    }
  }

  // the LED state follows only the board's confirmations
  fn process_message(&mut self, text : String) {
    let message = text.trim();
    log::debug!("Received from ESP32 : {}", message);

    if message.contains("LED ligado") {
      self.led_is_on = true;
    } else if message.contains("LED desligado") {
      self.led_is_on = false;
    }

    let color = if message.contains("Erro:") { WARN_COLOR } else { OK_COLOR };
    self.set_status(message, color);
  }

  pub fn toggle_command(&mut self) -> Option<LedCommand> {
    if !self.is_connected() {
      self.set_status(self.texts.connection_not_open(), DOWN_COLOR);
      return None;
    }

    if self.led_is_on {
      Some( LedCommand::Off )
    } else {
      Some( LedCommand::On )
    }
  }

  fn set_status(&mut self, text : &str, color : Color32) {
    self.status_text = text.to_string();
    self.status_color = color;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::super::texts::Language;

  fn opened_panel() -> PanelState {
    let mut panel = PanelState::new(Texts::new(Language::Portuguese));
    panel.apply_event(BoardEvent::Opened);
    panel
  }

  #[test]
  fn starts_disconnected_with_led_off() {
    let panel = PanelState::new(Texts::new(Language::Portuguese));
    assert_eq!(panel.status_text(), "Desconectado");
    assert_eq!(panel.status_color(), DOWN_COLOR);
    assert_eq!(panel.button_text(), "OFF");
    assert!(!panel.is_connected());
  }

  #[test]
  fn open_event_enables_the_button() {
    let panel = opened_panel();
    assert!(panel.is_connected());
    assert_eq!(panel.status_text(), "Conectado ao ESP32");
    assert_eq!(panel.status_color(), OK_COLOR);
  }

  #[test]
  fn led_ligado_message_turns_state_on() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::MessageReceived( String::from("LED ligado") ));
    assert!(panel.led_is_on());
    assert_eq!(panel.button_text(), "ON");
    assert_eq!(panel.status_text(), "LED ligado");
    assert_eq!(panel.status_color(), OK_COLOR);
  }

  #[test]
  fn led_desligado_message_turns_state_off() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::MessageReceived( String::from("LED ligado") ));
    panel.apply_event(BoardEvent::MessageReceived( String::from("LED desligado") ));
    assert!(!panel.led_is_on());
    assert_eq!(panel.button_text(), "OFF");
  }

  #[test]
  fn unrecognized_message_is_displayed_but_changes_nothing() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::MessageReceived( String::from("LED ligado") ));
    panel.apply_event(BoardEvent::MessageReceived( String::from("temperatura 25C") ));
    assert!(panel.led_is_on());
    assert_eq!(panel.button_text(), "ON");
    assert_eq!(panel.status_text(), "temperatura 25C");
  }

  #[test]
  fn erro_messages_are_shown_in_warning_color() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::MessageReceived( String::from("Erro: sensor falhou") ));
    assert!(!panel.led_is_on());
    assert_eq!(panel.status_text(), "Erro: sensor falhou");
    assert_eq!(panel.status_color(), WARN_COLOR);
  }

  #[test]
  fn message_is_trimmed_before_inspection() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::MessageReceived( String::from("  LED ligado \n") ));
    assert!(panel.led_is_on());
    assert_eq!(panel.status_text(), "LED ligado");
  }

  #[test]
  fn toggle_requests_the_negation_without_changing_state() {
    let mut panel = opened_panel();
    assert_eq!(panel.toggle_command(), Some( LedCommand::On ));
    assert!(!panel.led_is_on());
    assert_eq!(panel.status_text(), "Conectado ao ESP32");

    panel.apply_event(BoardEvent::MessageReceived( String::from("LED ligado") ));
    assert_eq!(panel.toggle_command(), Some( LedCommand::Off ));
    assert!(panel.led_is_on());
    assert_eq!(panel.status_text(), "LED ligado");
  }

  #[test]
  fn toggle_before_open_is_a_no_op() {
    let mut panel = PanelState::new(Texts::new(Language::Portuguese));
    assert_eq!(panel.toggle_command(), None);
    assert_eq!(panel.status_text(), "Conexão não está aberta");
    assert_eq!(panel.status_color(), DOWN_COLOR);
  }

  #[test]
  fn close_event_is_terminal_for_the_session() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::MessageReceived( String::from("LED ligado") ));
    panel.apply_event(BoardEvent::Closed { code : 1006, reason : String::new() });
    assert!(!panel.is_connected());
    assert_eq!(panel.status_text(), "Desconectado. Reinicie o aplicativo.");
    assert_eq!(panel.status_color(), DOWN_COLOR);
    assert_eq!(panel.toggle_command(), None);
  }

  #[test]
  fn transport_error_does_not_close_the_connection() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::TransportError( String::from("broken pipe") ));
    assert!(panel.is_connected());
    assert_eq!(panel.status_text(), "Erro na conexão");
    assert_eq!(panel.status_color(), WARN_COLOR);
  }

  #[test]
  fn enablement_ignores_the_led_state() {
    let mut panel = opened_panel();
    panel.apply_event(BoardEvent::MessageReceived( String::from("LED ligado") ));
    assert!(panel.is_connected());
    panel.apply_event(BoardEvent::Closed { code : 1000, reason : String::from("bye") });
    assert!(panel.led_is_on());
    assert!(!panel.is_connected());
  }

  #[test]
  fn english_texts_are_selectable() {
    let panel = PanelState::new(Texts::new(Language::English));
    assert_eq!(panel.status_text(), "Disconnected");
  }
}
