//! Events singleton operations.

use crate::schema::{Devfile, Events};

use super::CollectionError;

impl Devfile {
  /// The lifecycle events record, if any.
  pub fn get_events(&self) -> Option<&Events> {
    self.events.as_ref()
  }

  /// Fold incoming events (e.g. an ancestor's) into the document.
  ///
  /// Phase by phase: a phase populated on both sides is a conflict and
  /// fails with `AlreadyExists` for that phase; a locally empty phase
  /// adopts the incoming one. Phases folded before the conflicting one
  /// stay adopted, consistent with the non-transactional adds.
  pub fn add_events(&mut self, incoming: Events) -> Result<(), CollectionError> {
    let events = self.events.get_or_insert_with(Events::default);

    for (phase, incoming_phase, local_phase) in [
      ("preStart", incoming.pre_start, &mut events.pre_start),
      ("postStart", incoming.post_start, &mut events.post_start),
      ("preStop", incoming.pre_stop, &mut events.pre_stop),
      ("postStop", incoming.post_stop, &mut events.post_stop),
    ] {
      if incoming_phase.is_empty() {
        continue;
      }
      if !local_phase.is_empty() {
        return Err(CollectionError::AlreadyExists {
          kind: "events",
          key: phase.to_string(),
        });
      }
      *local_phase = incoming_phase;
    }
    Ok(())
  }
}
