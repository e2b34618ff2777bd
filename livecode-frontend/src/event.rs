use futures::{FutureExt, StreamExt};
use livecode_keymap::{conversion, message::KeymapMessage, MessageResolver};
use tokio::{
    select,
    sync::{
        mpsc::{self, Receiver},
        oneshot,
    },
};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    Task,
    User,
}

#[derive(Eq, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    Error(String),
    Executed(Vec<String>),
    Resize(u16, u16),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Keymap(msg) => write!(f, "Keymap({:?})", msg),
            Message::Error(err) => write!(f, "Error({:?})", err),
            Message::Executed(output) => write!(f, "Executed({} lines)", output.len()),
            Message::Resize(x, y) => write!(f, "Resize({}, {})", x, y),
        }
    }
}

pub struct Emitter {
    cancellation: Option<oneshot::Sender<oneshot::Sender<bool>>>,
    pub receiver: Receiver<Envelope>,
    sender: mpsc::Sender<Envelope>,
}

impl Emitter {
    pub fn start(resolver: MessageResolver) -> Self {
        let (sender, receiver) = mpsc::channel(1);

        let (cancellation, cancellation_receiver) = oneshot::channel();
        start_crossterm_listener(cancellation_receiver, resolver, sender.clone());

        Self {
            cancellation: Some(cancellation),
            receiver,
            sender,
        }
    }

    pub fn sender(&self) -> mpsc::Sender<Envelope> {
        self.sender.clone()
    }

    pub async fn shutdown(&mut self) {
        if let Some(cancellation) = self.cancellation.take() {
            let (sender, receiver) = oneshot::channel();
            if let Err(error) = cancellation.send(sender) {
                tracing::error!("sending cancellation failed: {:?}", error);
                return;
            }

            if let Err(error) = receiver.await {
                tracing::error!("receiving cancellation confirmation failed: {:?}", error);
            }
        }
    }
}

fn start_crossterm_listener(
    mut cancellation_receiver: oneshot::Receiver<oneshot::Sender<bool>>,
    mut resolver: MessageResolver,
    sender: mpsc::Sender<Envelope>,
) {
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();

        loop {
            let crossterm_event = reader.next().fuse();

            select! {
                Ok(confirmation) = &mut cancellation_receiver => {
                    if confirmation.send(true).is_err() {
                        tracing::warn!("cancellation confirmation was dropped");
                    }
                    break
                }
                Some(Ok(event)) = crossterm_event => {
                    if let Some(envelope) = handle_crossterm_event(&mut resolver, event) {
                        let _ = sender.send(envelope).await;
                    }
                }
            }
        }
    });
}

fn handle_crossterm_event(
    resolver: &mut MessageResolver,
    event: crossterm::event::Event,
) -> Option<Envelope> {
    match event {
        crossterm::event::Event::Key(key) => {
            let key = conversion::to_key(&key)?;
            let messages = resolver.add_key(key);
            if messages.is_empty() {
                return None;
            }

            Some(Envelope {
                messages: messages.into_iter().map(Message::Keymap).collect(),
                source: MessageSource::User,
            })
        }
        crossterm::event::Event::Resize(x, y) => Some(Envelope {
            messages: vec![Message::Resize(x, y)],
            source: MessageSource::User,
        }),
        crossterm::event::Event::FocusLost
        | crossterm::event::Event::FocusGained
        | crossterm::event::Event::Paste(_)
        | crossterm::event::Event::Mouse(_) => None,
    }
}
