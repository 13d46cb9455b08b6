//! Palette catalog: the fixed templates plus the growing product divisions.

use super::types::{NodeKind, Template};

const FIXED_TEMPLATES: &[(&str, NodeKind, &str)] = &[
	("board", NodeKind::Position, "Board"),
	("ceo", NodeKind::Position, "CEO"),
	("manager", NodeKind::Position, "Manager"),
	("employee", NodeKind::Position, "Employee"),
	("hr", NodeKind::Department, "HR Department"),
	("finance", NodeKind::Department, "Finance Department"),
	("marketing", NodeKind::Department, "Marketing Department"),
	("sales", NodeKind::Department, "Sales Department"),
	("logistics", NodeKind::Department, "Logistics Department"),
	("accounting", NodeKind::Department, "Accounting Department"),
	("it", NodeKind::Department, "IT Department"),
];

const SEEDED_PRODUCTS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
	pub id: String,
	pub label: String,
}

impl Product {
	/// The product at position `n` (0-based) of the catalog.
	fn nth(n: usize) -> Self {
		let letters = sequence_letters(n);
		Self {
			id: format!("product-{}", letters),
			label: format!("Product {} Division", letters.to_uppercase()),
		}
	}
}

/// Bijective base-26 name: a, b, ..., z, aa, ab, ...
fn sequence_letters(mut n: usize) -> String {
	let mut out = Vec::new();
	loop {
		out.push(b'a' + (n % 26) as u8);
		if n < 26 {
			break;
		}
		n = n / 26 - 1;
	}
	out.reverse();
	String::from_utf8_lossy(&out).into_owned()
}

#[derive(Clone, Debug)]
pub struct PaletteCatalog {
	fixed: Vec<Template>,
	products: Vec<Product>,
}

impl Default for PaletteCatalog {
	fn default() -> Self {
		let fixed = FIXED_TEMPLATES
			.iter()
			.map(|&(id, kind, label)| Template {
				id: id.into(),
				kind,
				label: label.into(),
			})
			.collect();
		Self {
			fixed,
			products: (0..SEEDED_PRODUCTS).map(Product::nth).collect(),
		}
	}
}

impl PaletteCatalog {
	/// Fixed templates first, then every product as a division.
	pub fn templates(&self) -> Vec<Template> {
		self.fixed
			.iter()
			.cloned()
			.chain(self.products.iter().map(|p| Template {
				id: p.id.clone(),
				kind: NodeKind::Division,
				label: p.label.clone(),
			}))
			.collect()
	}

	pub fn find(&self, id: &str) -> Option<Template> {
		self.templates().into_iter().find(|t| t.id == id)
	}

	pub fn add_product(&mut self) -> &Product {
		let next = Product::nth(self.products.len());
		self.products.push(next);
		&self.products[self.products.len() - 1]
	}

	/// Relabel the product with this id. Fixed templates are never touched.
	pub fn rename_product(&mut self, id: &str, label: &str) -> bool {
		match self.products.iter_mut().find(|p| p.id == id) {
			Some(product) => {
				product.label = label.to_string();
				true
			}
			None => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seeded_catalog_lists_fixed_then_products() {
		let catalog = PaletteCatalog::default();
		let templates = catalog.templates();
		assert_eq!(templates.len(), FIXED_TEMPLATES.len() + 2);
		assert_eq!(templates[0].id, "board");
		assert_eq!(templates[10].label, "IT Department");
		assert_eq!(templates[11].id, "product-a");
		assert_eq!(templates[12].label, "Product B Division");
		assert!(templates[11..].iter().all(|t| t.kind == NodeKind::Division));
	}

	#[test]
	fn added_products_continue_the_sequence() {
		let mut catalog = PaletteCatalog::default();
		catalog.add_product();
		catalog.add_product();
		let templates = catalog.templates();
		let added: Vec<_> = templates[templates.len() - 2..]
			.iter()
			.map(|t| (t.id.as_str(), t.label.as_str()))
			.collect();
		assert_eq!(
			added,
			vec![
				("product-c", "Product C Division"),
				("product-d", "Product D Division"),
			]
		);
	}

	#[test]
	fn sequence_keeps_going_past_z() {
		assert_eq!(sequence_letters(0), "a");
		assert_eq!(sequence_letters(25), "z");
		assert_eq!(sequence_letters(26), "aa");
		assert_eq!(sequence_letters(27), "ab");
		assert_eq!(sequence_letters(701), "zz");
		assert_eq!(sequence_letters(702), "aaa");
	}

	#[test]
	fn only_products_can_be_renamed() {
		let mut catalog = PaletteCatalog::default();
		assert!(catalog.rename_product("product-b", "Retail"));
		assert!(!catalog.rename_product("ceo", "Chief"));
		assert_eq!(catalog.find("product-b").unwrap().label, "Retail");
		assert_eq!(catalog.find("ceo").unwrap().label, "CEO");
	}
}
