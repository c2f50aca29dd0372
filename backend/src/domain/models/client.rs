use crate::storage::{Entity, FieldDescriptor};

/// A customer who places orders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub age: i32,
}

impl Client {
    pub fn new(name: &str, email: &str, phone: &str, address: &str, age: i32) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            age,
        }
    }
}

impl Entity for Client {
    const TYPE_NAME: &'static str = "Client";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor::identity(
            "id",
            |c| c.id.into(),
            |c, v| {
                c.id = v.into_i64("id")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "name",
            |c| c.name.as_str().into(),
            |c, v| {
                c.name = v.into_string("name")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "email",
            |c| c.email.as_str().into(),
            |c, v| {
                c.email = v.into_string("email")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "phone",
            |c| c.phone.as_str().into(),
            |c, v| {
                c.phone = v.into_string("phone")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "address",
            |c| c.address.as_str().into(),
            |c, v| {
                c.address = v.into_string("address")?;
                Ok(())
            },
        ),
        FieldDescriptor::data(
            "age",
            |c| c.age.into(),
            |c, v| {
                c.age = v.into_i32("age")?;
                Ok(())
            },
        ),
    ];
}
