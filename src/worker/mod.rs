use crate::egui::Context; // b/c of re-export
use tokio::sync::mpsc::{Sender, Receiver};
use tokio::sync::mpsc::error::TrySendError;
use tokio;
use log;
use futures::stream::StreamExt;
use futures::sink::SinkExt;
use tokio_tungstenite::tungstenite::Message;
use crate::interface::*;

mod socket;
use socket::*;

#[tokio::main]
pub async fn worker_thread(sender : Sender<BoardEvent>, receiver : Receiver<LedCommand>, ctx : Context, cfg : LedPanelConfig) {
  let result = worker_thread_prime(sender, receiver, ctx, cfg).await;
  if let Err ( e ) = result {
    log::error!("Error in worker_thread : {}. exiting....", e);
  }
}

pub async fn worker_thread_prime(sender : Sender<BoardEvent>, mut receiver : Receiver<LedCommand>, ctx : Context, cfg : LedPanelConfig) -> Result<(), String> {

  let url = cfg.endpoint.ws_url();

  let ws_stream = match connect_to_board(&url).await {
    Ok( ws_stream ) => ws_stream,
    Err( e ) => {
      log::error!("{}", e);
      //browser ordering: the error event first, the close event after it
      send_event(&sender, BoardEvent::TransportError( e ), &ctx);
      send_event(&sender, BoardEvent::Closed { code : 1006, reason : String::new() }, &ctx);
      ignore_commands_loop(receiver).await;
      return Ok(());
    },
  };

  let (mut write, mut read) = ws_stream.split();

  send_event(&sender, BoardEvent::Opened, &ctx);

  // ask for the current LED state
  if let Err( e ) = write.send(Message::Text( LedCommand::Status.wire_text().to_string() )).await {
    log::error!("Failed to request LED status : {}", e);
    send_event(&sender, BoardEvent::TransportError( e.to_string() ), &ctx);
  }

  loop {
    tokio::select! {
      cmd = receiver.recv() => {
        match cmd {
          Some( cmd ) => {
            log::debug!("Sending command: {}", cmd.wire_text());
            if let Err( e ) = write.send(Message::Text( cmd.wire_text().to_string() )).await {
              log::error!("Failed to send {:?} command : {}", cmd, e);
              send_event(&sender, BoardEvent::TransportError( e.to_string() ), &ctx);
            }
          },
          None => {
            log::warn!("Failed to receive commands, probably GUI is dead. Exiting...");
            return Ok(());
          },
        }
      }
      frame = read.next() => {
        match frame {
          Some( Ok( Message::Text( text ) ) ) => {
            send_event(&sender, BoardEvent::MessageReceived( text ), &ctx);
          },
          Some( Ok( Message::Close( close_frame ) ) ) => {
            let (code, reason) = match close_frame {
              Some( f ) => (u16::from(f.code), f.reason.to_string()),
              None => (1005, String::new()),
            };
            send_event(&sender, BoardEvent::Closed { code, reason }, &ctx);
            break;
          },
          Some( Ok( other ) ) => log::debug!("Ignoring non-text frame : {:?}", other),
          Some( Err( e ) ) => {
            log::error!("WebSocket read failed : {}", e);
            send_event(&sender, BoardEvent::TransportError( e.to_string() ), &ctx);
            send_event(&sender, BoardEvent::Closed { code : 1006, reason : String::new() }, &ctx);
            break;
          },
          None => {
            send_event(&sender, BoardEvent::Closed { code : 1006, reason : String::new() }, &ctx);
            break;
          },
        }
      }
    }
  }

  ignore_commands_loop(receiver).await;
  Ok(())
}

fn send_event(sender : &Sender<BoardEvent>, event : BoardEvent, egui_ctx : &Context) {
  match sender.try_send( event ) {
    Ok(()) => egui_ctx.request_repaint(),
    Err( TrySendError::Full( event ) ) => log::warn!("Failed to send {:?}, GUI is not consuming it!", event),
    Err( TrySendError::Closed( _ ) ) => log::warn!("Failed to send event - channel is closed. Probably GUI is dead."),
  }
}

// no reconnection: once the socket is gone only an application restart brings it back
async fn ignore_commands_loop(mut receiver : Receiver<LedCommand>) {
  loop {
    match receiver.recv().await {
      Some( cmd ) => log::debug!("Connection is closed, ignoring {:?} command", cmd),
      None => {
        log::warn!("Failed to receive commands, probably GUI is dead. Exiting...");
        break;
      },
    }
  }
}
