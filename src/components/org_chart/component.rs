use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::ErrorEvent;

use super::draggable::{DraggableBox, NodeActions};
use super::drop_zone::{DropZone, DroppedItem};
use super::render::{ConnectorSegment, connector_segments};
use super::state::{Action, ConnectMode, OrgStructure};
use super::types::Direction;

const ACTION_BUTTON_STYLE: &str = "margin-top: 1rem; padding: 0.5rem 1rem; color: white; border: none; \
	border-radius: 4px; cursor: pointer;";

/// Route uncaught window errors into the builder's error message.
fn install_error_hook(structure: RwSignal<OrgStructure>) {
	let Some(window) = web_sys::window() else {
		warn!("No window; unhandled errors will not be surfaced");
		return;
	};
	let hook = Closure::<dyn FnMut(ErrorEvent)>::new(move |ev: ErrorEvent| {
		structure.update(|s| s.report_unhandled(&ev.message()));
	});
	if window
		.add_event_listener_with_callback("error", hook.as_ref().unchecked_ref())
		.is_err()
	{
		warn!("Could not register the window error listener");
		return;
	}

	let hook = StoredValue::new_local(hook);
	on_cleanup(move || {
		let Some(window) = web_sys::window() else {
			return;
		};
		hook.try_with_value(|cb| {
			let _ = window.remove_event_listener_with_callback("error", cb.as_ref().unchecked_ref());
		});
	});
}

#[component]
fn ConnectorLine(segment: ConnectorSegment) -> impl IntoView {
	view! {
		<svg style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;">
			<line
				x1=segment.start.x
				y1=segment.start.y
				x2=segment.end.x
				y2=segment.end.y
				stroke="black"
				stroke-width="2"
			/>
		</svg>
	}
}

#[component]
pub fn OrgStructureBuilder(#[prop(default = 600)] min_height: u32) -> impl IntoView {
	let structure = RwSignal::new(OrgStructure::default());
	install_error_hook(structure);

	let dispatch = move |action: Action| {
		// Failures are logged and surfaced by the controller itself.
		structure.update(|s| {
			let _ = s.dispatch(action);
		});
	};

	let on_rename = Callback::new(move |(id, label): (String, String)| {
		dispatch(Action::Rename { id, label });
	});
	let on_drop = Callback::new(move |dropped: DroppedItem| {
		dispatch(Action::Drop {
			payload: dropped.payload,
			point: dropped.point,
			bounds: dropped.bounds,
		});
	});

	let palette = move || {
		structure
			.with(|s| s.palette())
			.into_iter()
			.map(|template| {
				view! {
					<DraggableBox
						id=template.id
						kind=template.kind
						label=template.label
						on_rename=on_rename
					/>
				}
			})
			.collect_view()
	};

	let lines = move || {
		structure
			.with(|s| connector_segments(s.nodes(), s.connections()))
			.into_iter()
			.map(|segment| view! { <ConnectorLine segment=segment /> })
			.collect_view()
	};

	let nodes = move || {
		let (nodes, pending) = structure.with(|s| {
			let pending = match s.connect_mode() {
				ConnectMode::AwaitingSecond(id) => Some(id.clone()),
				ConnectMode::Idle => None,
			};
			(s.nodes().to_vec(), pending)
		});
		nodes
			.into_iter()
			.map(|node| {
				let awaiting = pending.as_deref() == Some(node.id.as_str());
				let (move_id, delete_id, connect_id) =
					(node.id.clone(), node.id.clone(), node.id.clone());
				let actions = NodeActions {
					on_move: Callback::new(move |direction: Direction| {
						dispatch(Action::Move {
							id: move_id.clone(),
							direction,
						});
					}),
					on_delete: Callback::new(move |()| {
						dispatch(Action::Delete {
							id: delete_id.clone(),
						});
					}),
					on_connect: Callback::new(move |()| {
						dispatch(Action::Connect {
							id: connect_id.clone(),
						});
					}),
				};
				view! {
					<div style=format!("position: absolute; left: {}px; top: {}px;", node.x, node.y)>
						<DraggableBox
							id=node.id
							kind=node.kind
							label=node.label
							on_rename=on_rename
							actions=actions
							awaiting_connection=awaiting
						/>
					</div>
				}
			})
			.collect_view()
	};

	let error_banner = move || {
		structure
			.with(|s| s.error().map(str::to_string))
			.map(|message| view! { <div style="color: red; margin-bottom: 1rem;">{message}</div> })
	};

	let connect_hint = move || {
		structure
			.with(|s| matches!(s.connect_mode(), ConnectMode::AwaitingSecond(_)))
			.then(|| view! { <div style="color: #1890ff; margin-bottom: 1rem;">"Select a box to connect to."</div> })
	};

	view! {
		<div style="display: flex;">
			<div style="width: 30%; padding: 1rem; overflow-y: auto; max-height: 80vh;">
				<h3 style="font-weight: bold; margin-bottom: 1rem;">"Available Components"</h3>
				{palette}
				<button
					on:click=move |_| dispatch(Action::AddProduct)
					style=format!("{} background-color: #52c41a;", ACTION_BUTTON_STYLE)
				>
					"Add New Product/Division"
				</button>
			</div>
			<div style="width: 70%; padding: 1rem;">
				<h3 style="font-weight: bold; margin-bottom: 1rem;">"Organizational Structure"</h3>
				{error_banner}
				{connect_hint}
				<DropZone on_drop=on_drop min_height=min_height>
					{lines}
					{nodes}
				</DropZone>
				<button
					on:click=move |_| dispatch(Action::Reset)
					style=format!("{} background-color: #f44336;", ACTION_BUTTON_STYLE)
				>
					"Reset Structure"
				</button>
			</div>
		</div>
	}
}
