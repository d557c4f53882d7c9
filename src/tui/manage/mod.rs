//! Ticket manager (`resolv tickets`)
//!
//! Card list of the in-memory tickets with create, edit and delete modals.
//! Every key press goes through `key_to_action` and `reduce_manage_state`.

pub mod modals;
pub mod model;

use iocraft::prelude::*;

use crate::ticket::TicketCollection;
use crate::tui::components::ticket_card::CARD_HEIGHT;
use crate::tui::components::{EmptyState, Footer, Header, TicketCard, render_toast};
use crate::tui::theme::theme;

pub use modals::{DeleteConfirmModal, TicketFormModal};
pub use model::{
    ManageAction, ManageState, ManageViewModel, Modal, compute_manage_view_model, key_to_action,
    reduce_manage_state,
};

#[derive(Default, Props)]
pub struct TicketManagerProps {
    /// Tickets to start from; an empty collection when absent
    pub tickets: Option<TicketCollection>,
}

/// Main ticket manager component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header                                    |
/// +------------------------------------------+
/// | TicketCard                                |
/// | TicketCard                                |
/// | ...                                       |
/// +------------------------------------------+
/// | Toast (optional)                          |
/// | Footer                                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn TicketManager<'a>(props: &TicketManagerProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let initial = props.tickets.clone();
    let mut state: State<ManageState> = hooks.use_state(move || {
        ManageState::new(initial.unwrap_or_else(|| TicketCollection::new(crate::types::DEFAULT_ID_PREFIX)))
    });

    hooks.use_terminal_events(move |event| match event {
        TerminalEvent::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => {
            let current = state.read().clone();
            if let Some(action) = key_to_action(&current, code, modifiers) {
                state.set(reduce_manage_state(current, action));
            }
        }
        _ => {}
    });

    let current = state.read().clone();
    if current.should_exit {
        system.exit();
    }

    // Header (1) + footer (1) + toast (3)
    let toast_rows = if current.toast.is_some() { 3 } else { 0 };
    let list_rows = (height as usize).saturating_sub(2 + toast_rows);
    let visible_cards = (list_rows / CARD_HEIGHT).max(1);
    let vm = compute_manage_view_model(&current, visible_cards);

    let theme = theme();
    let toast = render_toast(vm.toast.as_ref());
    let delete_title = vm.delete.map(|d| d.ticket_title);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                subtitle: Some("Manage Tickets"),
                ticket_count: Some(vm.total),
            )

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(if vm.show_empty_state {
                    vec![element!(EmptyState).into_any()]
                } else {
                    vm.cards.into_iter().map(|card| element! {
                        TicketCard(ticket: Some(card.ticket), is_selected: card.is_selected)
                    }.into_any()).collect()
                })
            }

            #(toast)

            Footer(shortcuts: vm.shortcuts)

            #(vm.form.map(|form| element! {
                TicketFormModal(form: Some(form))
            }))

            #(delete_title.map(|title| element! {
                DeleteConfirmModal(ticket_title: title)
            }))
        }
    }
}
