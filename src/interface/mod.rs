use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
  Connecting,
  Open,
  Closing,
  Closed,
}

#[derive(Debug, Clone)]
pub enum BoardEvent {
  Opened,
  MessageReceived( String ),
  TransportError( String ),
  Closed { code : u16, reason : String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
  On,
  Off,
  Status,
}

impl LedCommand {
  pub fn wire_text(&self) -> &'static str {
    match self {
      LedCommand::On => "ON",
      LedCommand::Off => "OFF",
      LedCommand::Status => "STATUS",
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoardEndpoint {
  pub address : String,
  pub port : u16,
}

impl Default for BoardEndpoint {
  fn default() -> Self {
    BoardEndpoint {
      address : String::from("10.110.22.8"),
      port : 8765,
    }
  }
}

impl BoardEndpoint {
  pub fn ws_url(&self) -> String {
    format!("ws://{}:{}", self.address, self.port)
  }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct LedPanelConfig {
  pub endpoint : BoardEndpoint,
  pub use_english_texts : bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wire_words_match_the_board_protocol() {
    assert_eq!(LedCommand::On.wire_text(), "ON");
    assert_eq!(LedCommand::Off.wire_text(), "OFF");
    assert_eq!(LedCommand::Status.wire_text(), "STATUS");
  }

  #[test]
  fn default_endpoint_is_the_board_address() {
    let cfg = LedPanelConfig::default();
    assert_eq!(cfg.endpoint.ws_url(), "ws://10.110.22.8:8765");
  }
}
