use log;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub type BoardSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub async fn connect_to_board(url : &str) -> Result<BoardSocket, String> {
  log::info!("Trying to connect to {}...", url);

  let (ws_stream, response) = connect_async(url).await
    .map_err(|e| format!("Failed to connect to {} : {}", url, e))?;

  log::info!("Connected to ESP32 (handshake status : {})", response.status());
  Ok( ws_stream )
}
