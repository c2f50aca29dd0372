use crate::storage::{Entity, FieldDescriptor};

/// A catalog item. Stock is kept non-negative by order placement, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    pub fn new(name: &str, description: &str, price: f64, stock: i32) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            price,
            stock,
        }
    }
}

impl Entity for Product {
    const TYPE_NAME: &'static str = "Product";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::identity(
            "id",
            |p| p.id.into(),
            |p, v| {
                p.id = v.into_i64("id")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "name",
            |p| p.name.as_str().into(),
            |p, v| {
                p.name = v.into_string("name")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "description",
            |p| p.description.as_str().into(),
            |p, v| {
                p.description = v.into_string("description")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "price",
            |p| p.price.into(),
            |p, v| {
                p.price = v.into_f64("price")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "stock",
            |p| p.stock.into(),
            |p, v| {
                p.stock = v.into_i32("stock")?;
                Ok(())
            },
        ),
    ];
}
