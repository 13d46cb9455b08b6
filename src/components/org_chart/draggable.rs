use leptos::prelude::*;
use web_sys::{DragEvent, KeyboardEvent};

use super::types::{Direction, DragPayload, NodeKind};

/// Inline rename state of a single box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenameDraft {
	editing: bool,
	text: String,
}

impl RenameDraft {
	pub fn begin(&mut self, label: &str) {
		self.editing = true;
		self.text = label.to_string();
	}

	pub fn is_editing(&self) -> bool {
		self.editing
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn set_text(&mut self, text: String) {
		self.text = text;
	}

	pub fn cancel(&mut self) {
		self.editing = false;
	}

	/// Finish editing and hand back the label to apply.
	///
	/// Blank text keeps the draft open and yields nothing. Outside edit mode
	/// this is a no-op, so blur after Enter cannot commit twice.
	pub fn commit(&mut self) -> Option<String> {
		if !self.editing {
			return None;
		}
		let label = self.text.trim();
		if label.is_empty() {
			return None;
		}
		let label = label.to_string();
		self.editing = false;
		Some(label)
	}
}

/// Handlers a placed node exposes. Palette entries have none.
#[derive(Clone, Copy)]
pub struct NodeActions {
	pub on_move: Callback<Direction>,
	pub on_delete: Callback<()>,
	pub on_connect: Callback<()>,
}

fn box_style(kind: NodeKind, dragging: bool, awaiting_connection: bool) -> String {
	format!(
		"opacity: {}; cursor: move; border: {}; padding: 0.5rem; margin: 0.5rem; \
		 background-color: {}; display: inline-block; width: 150px; text-align: center; \
		 position: relative;",
		if dragging { 0.5 } else { 1.0 },
		if awaiting_connection {
			"2px solid #1890ff"
		} else {
			"1px solid #ccc"
		},
		kind.background(),
	)
}

#[component]
pub fn DraggableBox(
	#[prop(into)] id: String,
	kind: NodeKind,
	#[prop(into)] label: String,
	on_rename: Callback<(String, String)>,
	#[prop(optional)] actions: Option<NodeActions>,
	#[prop(default = false)] awaiting_connection: bool,
) -> impl IntoView {
	let draft = RwSignal::new(RenameDraft::default());
	let (dragging, set_dragging) = signal(false);
	let input_ref = NodeRef::<leptos::html::Input>::new();

	Effect::new(move |_| {
		if let Some(input) = input_ref.get() {
			let _ = input.focus();
		}
	});

	let payload = DragPayload {
		id: id.clone(),
		kind,
	};
	let on_dragstart = move |ev: DragEvent| {
		if let Some(transfer) = ev.data_transfer() {
			let _ = transfer.set_data(DragPayload::FORMAT, &payload.encode());
			transfer.set_effect_allowed("copyMove");
		}
		set_dragging.set(true);
	};

	let commit = Callback::new(move |()| {
		let mut committed = None;
		draft.update(|d| committed = d.commit());
		if let Some(label) = committed {
			on_rename.run((id.clone(), label));
		}
	});

	let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
		"Enter" => commit.run(()),
		"Escape" => draft.update(|d| d.cancel()),
		_ => {}
	};

	let affordances = actions.map(|a| {
		view! {
			<div>
				<button on:click=move |_| a.on_move.run(Direction::Left) style="margin-right: 5px;">
					"←"
				</button>
				<button on:click=move |_| a.on_move.run(Direction::Right) style="margin-right: 5px;">
					"→"
				</button>
				<button
					on:click=move |_| a.on_delete.run(())
					style="background-color: #ff4d4f; color: white; border: none; border-radius: 4px; margin-right: 5px;"
				>
					"X"
				</button>
				<button
					on:click=move |_| a.on_connect.run(())
					style="background-color: #1890ff; color: white; border: none; border-radius: 4px;"
				>
					"Connect"
				</button>
			</div>
		}
	});

	view! {
		<div
			draggable="true"
			on:dragstart=on_dragstart
			on:dragend=move |_| set_dragging.set(false)
			style=move || box_style(kind, dragging.get(), awaiting_connection)
		>
			<Show
				when=move || draft.with(|d| d.is_editing())
				fallback=move || {
					let seed = label.clone();
					view! {
						<div on:dblclick=move |_| draft.update(|d| d.begin(&seed))>
							{label.clone()}
						</div>
					}
				}
			>
				<input
					node_ref=input_ref
					prop:value=move || draft.with(|d| d.text().to_string())
					on:input=move |ev| draft.update(|d| d.set_text(event_target_value(&ev)))
					on:blur=move |_| commit.run(())
					on:keydown=on_keydown
				/>
			</Show>
			{affordances}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn enter_then_blur_commits_once() {
		let mut draft = RenameDraft::default();
		draft.begin("CEO");
		draft.set_text("Chief".into());
		assert_eq!(draft.commit(), Some("Chief".to_string()));
		assert_eq!(draft.commit(), None);
		assert!(!draft.is_editing());
	}

	#[test]
	fn blank_commit_keeps_editing() {
		let mut draft = RenameDraft::default();
		draft.begin("CEO");
		draft.set_text("   ".into());
		assert_eq!(draft.commit(), None);
		assert!(draft.is_editing());
		draft.set_text(" Board ".into());
		assert_eq!(draft.commit(), Some("Board".to_string()));
	}

	#[test]
	fn begin_seeds_current_label() {
		let mut draft = RenameDraft::default();
		assert_eq!(draft.commit(), None);
		draft.begin("HR Department");
		assert_eq!(draft.text(), "HR Department");
		draft.cancel();
		assert!(!draft.is_editing());
		assert_eq!(draft.commit(), None);
	}

	#[test]
	fn style_tracks_drag_and_connect_state() {
		let idle = box_style(NodeKind::Department, false, false);
		assert!(idle.contains("opacity: 1;"));
		assert!(idle.contains("#e6f7ff"));
		let busy = box_style(NodeKind::Division, true, true);
		assert!(busy.contains("opacity: 0.5;"));
		assert!(busy.contains("2px solid #1890ff"));
	}
}
