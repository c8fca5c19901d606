//! Message processing
//!
//! Runs a message through the TEA update function, follows chained
//! messages, and hands each resulting action to the [`ActionContext`].

use crate::actions::ActionContext;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, ctx: &mut ActionContext) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            ctx.handle_action(action);
        }

        msg = result.message;
    }
}
