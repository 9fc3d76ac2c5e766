//! Background dump worker fed by the capture side.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use chrono::Utc;

use crate::config::DumpConfig;
use crate::decoder::Decoder;
use crate::format::LineSink;
use crate::hci::{should_capture, timestamp_of, CapturedPacket, PacketType};
use crate::{debug, warn, DumpError};

pub const WORKER_NAME: &str = "hci_dump_thread";

/// A running dump session.
///
/// Records are decoded in the order they were queued. Producers block while
/// the queue is full. Dropping the session without [`HciDump::shut_down`]
/// still lets the worker drain and exit, but its count is lost.
pub struct HciDump {
    config: DumpConfig,
    sender: SyncSender<CapturedPacket>,
    worker: JoinHandle<usize>,
}

impl HciDump {
    pub fn start_up<S>(config: &DumpConfig, sink: S) -> Result<Self, DumpError>
    where
        S: LineSink + Send + 'static,
    {
        if !config.enabled {
            return Err(DumpError::Disabled);
        }
        let (sender, receiver) = sync_channel(config.queue_depth);
        let worker = thread::Builder::new()
            .name(WORKER_NAME.into())
            .spawn(move || worker_loop(receiver, sink))
            .map_err(|_| DumpError::Io)?;
        debug!("{} started, queue depth {}", WORKER_NAME, config.queue_depth);
        Ok(Self {
            config: *config,
            sender,
            worker,
        })
    }

    /// Capture entry point: filters, stamps with the wall clock and queues.
    /// Returns whether the packet was queued.
    pub fn display(&self, packet_type: PacketType, data: &[u8]) -> Result<bool, DumpError> {
        if !should_capture(packet_type, data, self.config.filter_fw_log) {
            return Ok(false);
        }
        let timestamp = timestamp_of(&Utc::now());
        self.enqueue(CapturedPacket::new(packet_type, timestamp, data))?;
        Ok(true)
    }

    pub fn enqueue(&self, packet: CapturedPacket) -> Result<(), DumpError> {
        self.sender.send(packet).map_err(|_| DumpError::QueueClosed)
    }

    /// Closes the queue and waits for the worker to drain it.
    /// Returns how many records produced output.
    pub fn shut_down(self) -> Result<usize, DumpError> {
        let Self { sender, worker, .. } = self;
        drop(sender);
        let decoded = worker.join().map_err(|_| DumpError::QueueClosed)?;
        debug!("{} stopped after {} records", WORKER_NAME, decoded);
        Ok(decoded)
    }
}

fn worker_loop<S: LineSink>(receiver: Receiver<CapturedPacket>, sink: S) -> usize {
    let mut decoder = Decoder::new(sink);
    while let Ok(packet) = receiver.recv() {
        if let Err(e) = decoder.decode_captured(&packet) {
            warn!("dropping {:?} record: {}", packet.packet_type, e);
        }
    }
    decoder.decoded()
}
