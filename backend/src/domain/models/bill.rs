use crate::storage::{Entity, FieldDescriptor};

/// The bill logged for an order.
///
/// Fields are private: a bill is created once by the order service and only
/// read afterwards. The store still fills it through the descriptor table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bill {
    id: i64,
    order_id: i64,
    total_amount: f64,
}

impl Bill {
    pub fn new(order_id: i64, total_amount: f64) -> Self {
        Self {
            id: 0,
            order_id,
            total_amount,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

impl Entity for Bill {
    const TYPE_NAME: &'static str = "Bill";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::identity(
            "id",
            |b| b.id.into(),
            |b, v| {
                b.id = v.into_i64("id")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "orderid",
            |b| b.order_id.into(),
            |b, v| {
                b.order_id = v.into_i64("orderid")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "totalamount",
            |b| b.total_amount.into(),
            |b, v| {
                b.total_amount = v.into_f64("totalamount")?;
                Ok(())
            },
        ),
    ];
}
