// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Worker-thread execution host
//!
//! Large meshes are grouped off the interactive thread. Buffers are moved
//! into the worker and the result moved back over a per-job reply channel;
//! nothing is copied and nothing is shared while a pass runs. A malformed
//! job yields an empty result rather than killing the worker, and every
//! outcome echoes the mesh identity that initiated it so callers can
//! discard results superseded by a newer mesh load.

use serde::{Deserialize, Serialize};
use sketchmesh_grouping::{group_planar_faces, GroupingOptions, GroupingResult};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::OnceLock;
use std::thread::{self, JoinHandle};

/// One grouping request.
///
/// `positions` is required; a job arriving without it is malformed and
/// answered with an empty result. `indices` is genuinely optional:
/// absent means the positions form a triangle soup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingJob {
    /// Identity of the mesh that initiated the pass, echoed in the outcome
    pub mesh_id: u64,
    /// Flat vertex position buffer
    pub positions: Option<Vec<f32>>,
    /// Triangle index buffer, absent for triangle soup
    pub indices: Option<Vec<u32>>,
    /// Quantization parameters
    #[serde(default)]
    pub options: GroupingOptions,
}

impl GroupingJob {
    /// Job with default options over owned buffers.
    pub fn new(mesh_id: u64, positions: Vec<f32>, indices: Option<Vec<u32>>) -> Self {
        Self {
            mesh_id,
            positions: Some(positions),
            indices,
            options: GroupingOptions::default(),
        }
    }
}

/// Result of one grouping job, owned by the receiver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingOutcome {
    /// Mesh identity copied from the job
    pub mesh_id: u64,
    /// Grouping result; empty when the job was malformed or rejected
    pub result: GroupingResult,
}

enum Message {
    Job(GroupingJob, Sender<GroupingOutcome>),
    Shutdown,
}

/// Dedicated grouping thread.
///
/// At most one pass is in flight per worker; jobs queue in submission
/// order. Callers impose their own timeout on the reply channel since the
/// pass itself is not preemptible mid-mesh.
pub struct GroupingWorker {
    sender: Sender<Message>,
    handle: Option<JoinHandle<()>>,
}

impl GroupingWorker {
    /// Spawn the worker thread.
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("sketchmesh-grouping".into())
            .spawn(move || worker_loop(receiver))
            .expect("failed to spawn grouping worker thread");
        Self {
            sender,
            handle: Some(handle),
        }
    }

    /// Move a job into the worker, returning the reply channel.
    ///
    /// The buffers travel by ownership transfer; the caller keeps no view
    /// of them while the pass runs. Receive with a deadline
    /// (`recv_timeout`) when the mesh size is unknown.
    pub fn submit(&self, job: GroupingJob) -> Receiver<GroupingOutcome> {
        let (reply, outcome) = mpsc::channel();
        // Send only fails after shutdown; the disconnected reply channel
        // then reports the job as lost.
        let _ = self.sender.send(Message::Job(job, reply));
        outcome
    }
}

impl Drop for GroupingWorker {
    fn drop(&mut self) {
        let _ = self.sender.send(Message::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Process-wide grouping worker, spawned on first use.
///
/// The viewer only ever groups one mesh at a time, so a single shared
/// thread is enough; tests that need isolation spawn their own.
pub fn shared_worker() -> &'static GroupingWorker {
    static SHARED: OnceLock<GroupingWorker> = OnceLock::new();
    SHARED.get_or_init(GroupingWorker::spawn)
}

fn worker_loop(receiver: Receiver<Message>) {
    while let Ok(message) = receiver.recv() {
        match message {
            Message::Job(job, reply) => {
                let _ = reply.send(run_job(job));
            }
            Message::Shutdown => break,
        }
    }
}

fn run_job(job: GroupingJob) -> GroupingOutcome {
    let GroupingJob {
        mesh_id,
        positions,
        indices,
        options,
    } = job;

    let result = match positions {
        Some(positions) => {
            match group_planar_faces(&positions, indices.as_deref(), &options) {
                Ok(result) => {
                    tracing::debug!(
                        mesh_id,
                        triangles = result.triangle_count(),
                        groups = result.group_count(),
                        "grouped mesh on worker"
                    );
                    result
                }
                Err(error) => {
                    tracing::warn!(mesh_id, %error, "grouping job rejected");
                    GroupingResult::empty()
                }
            }
        }
        None => {
            tracing::warn!(mesh_id, "grouping job missing position buffer");
            GroupingResult::empty()
        }
    };

    GroupingOutcome { mesh_id, result }
}
