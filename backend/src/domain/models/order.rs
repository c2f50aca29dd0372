use crate::storage::{Entity, FieldDescriptor};

/// A client's order for some quantity of one product.
///
/// `client_id` and `product_id` are plain ids; nothing below the order
/// service checks that they point at existing rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    pub id: i64,
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

impl Order {
    pub fn new(client_id: i64, product_id: i64, quantity: i32) -> Self {
        Self {
            id: 0,
            client_id,
            product_id,
            quantity,
        }
    }
}

impl Entity for Order {
    const TYPE_NAME: &'static str = "Order";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::identity(
            "id",
            |o| o.id.into(),
            |o, v| {
                o.id = v.into_i64("id")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "clientid",
            |o| o.client_id.into(),
            |o, v| {
                o.client_id = v.into_i64("clientid")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "productid",
            |o| o.product_id.into(),
            |o, v| {
                o.product_id = v.into_i64("productid")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "quantity",
            |o| o.quantity.into(),
            |o, v| {
                o.quantity = v.into_i32("quantity")?;
                Ok(())
            },
        ),
    ];
}
