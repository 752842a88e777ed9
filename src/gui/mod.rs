use eframe::egui;
use crate::egui::*;
use crate::egui::widget_text::RichText;
use tokio::sync::mpsc::{channel, Sender, Receiver};
use tokio::sync::mpsc::error::TryRecvError;
use std::thread;
use log;

use crate::interface::*;
use crate::worker::worker_thread;

mod panel;
mod texts;

use panel::PanelState;
use texts::{Texts, Language};

pub struct LedPanel {
  panel : PanelState,
  receiver : Receiver<BoardEvent>,
  sender : Sender<LedCommand>,
}

impl LedPanel {
  pub fn new(cc : &eframe::CreationContext<'_>, cfg : LedPanelConfig) -> Self {

    const MAX_NUM_MESSAGES : usize = 10;

    let (worker_sender, gui_receiver) = channel::<BoardEvent>(MAX_NUM_MESSAGES);
    let (gui_sender, worker_receiver) = channel::<LedCommand>(MAX_NUM_MESSAGES);

    let ctx = cc.egui_ctx.clone();

    let language = if cfg.use_english_texts { Language::English } else { Language::Portuguese };

    // detached, but we control it via the channels
    thread::spawn(move|| worker_thread(worker_sender, worker_receiver, ctx, cfg));

    LedPanel {
     panel : PanelState::new(Texts::new(language)),
     receiver : gui_receiver,
     sender : gui_sender,
   }
  }

  fn send_command(&self, cmd : LedCommand) {
    if let Err( err ) = self.sender.try_send( cmd ) {
      log::error!("Failed to send {:?} command. Ignoring.", err);
    }
  }
}

impl eframe::App for LedPanel {
  fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {

    //events are deltas, every one of them has to be applied in arrival order
    loop {
      match self.receiver.try_recv() {
        Ok( event ) => self.panel.apply_event( event ),
        Err( TryRecvError::Disconnected ) => {
          log::error!("Worker thread is dead. Closing...");
          frame.close();
          break;
        },
        _ => break,
      }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
      ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.heading( RichText::new("ESP32 LED").size(32.0) );
        ui.add_space(10.0);
        ui.label( RichText::new(self.panel.status_text()).heading().color(self.panel.status_color()) );
        ui.add_space(20.0);

        let fill = if self.panel.led_is_on() { Color32::DARK_GREEN } else { Color32::DARK_GRAY };
        let button = Button::new( RichText::new(self.panel.button_text()).heading() ).fill(fill);

        if ui.add_enabled(self.panel.is_connected(), button).clicked() {
          if let Some( cmd ) = self.panel.toggle_command() {
            self.send_command( cmd );
          }
        }
      });

      if ui.ctx().input( |i| i.key_pressed(Key::Q) )   {
        frame.close();
      }
    });
  }

}
