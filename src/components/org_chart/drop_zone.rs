use leptos::prelude::*;
use log::debug;
use web_sys::DragEvent;

use super::types::{Bounds, DragPayload, Point};

/// What the surface hands upstream when something lands on it.
#[derive(Clone, Debug, PartialEq)]
pub struct DroppedItem {
	pub payload: DragPayload,
	pub point: Point,
	/// `None` while the surface has not been laid out.
	pub bounds: Option<Bounds>,
}

#[component]
pub fn DropZone(
	on_drop: Callback<DroppedItem>,
	#[prop(default = 600)] min_height: u32,
	children: Children,
) -> impl IntoView {
	let zone_ref = NodeRef::<leptos::html::Div>::new();
	let (is_over, set_over) = signal(false);

	let on_dragover = move |ev: DragEvent| {
		ev.prevent_default();
		set_over.set(true);
	};

	let on_drop_event = move |ev: DragEvent| {
		ev.prevent_default();
		set_over.set(false);

		let raw = ev
			.data_transfer()
			.and_then(|t| t.get_data(DragPayload::FORMAT).ok())
			.unwrap_or_default();
		let Some(payload) = DragPayload::decode(&raw) else {
			debug!("Ignoring foreign drop: {:?}", raw);
			return;
		};

		let bounds = zone_ref.get_untracked().map(|zone| {
			let rect = zone.get_bounding_client_rect();
			Bounds {
				left: rect.left(),
				top: rect.top(),
			}
		});
		on_drop.run(DroppedItem {
			payload,
			point: Point {
				x: ev.client_x() as f64,
				y: ev.client_y() as f64,
			},
			bounds,
		});
	};

	view! {
		<div
			node_ref=zone_ref
			on:dragover=on_dragover
			on:dragleave=move |_| set_over.set(false)
			on:drop=on_drop_event
			style=move || {
				format!(
					"min-height: {}px; border: 2px dashed #ccc; padding: 1rem; background-color: {}; position: relative;",
					min_height,
					if is_over.get() { "#f0f0f0" } else { "white" },
				)
			}
		>
			{children()}
		</div>
	}
}
