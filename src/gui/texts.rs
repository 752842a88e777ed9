
#[derive(PartialEq)]
pub enum Language {
 Portuguese,
 English
}

pub struct Texts {
  language : Language,
}

impl Texts {
 pub fn new(language : Language) -> Texts {
   Texts {language}
 }

 pub fn disconnected<'a>(&self) -> &'a str {
     self.select("Desconectado", "Disconnected")
 }

 pub fn connected<'a>(&self) -> &'a str {
     self.select("Conectado ao ESP32", "Connected to ESP32")
 }

 pub fn connection_error<'a>(&self) -> &'a str {
     self.select("Erro na conexão", "Connection error")
 }

 pub fn connection_closed<'a>(&self) -> &'a str {
     self.select("Desconectado. Reinicie o aplicativo.", "Disconnected. Restart the application.")
 }

 pub fn connection_not_open<'a>(&self) -> &'a str {
     self.select("Conexão não está aberta", "Connection is not open")
 }

 fn select<'a>(&self, t1 : &'a str, t2: &'a str) -> &'a str
 {
     if self.language == Language::Portuguese {
         t1
     } else {
         t2
     }
 }

}
