use crate::domain::TableView;
use shared::TableResponse;

pub struct TableMapper;

impl TableMapper {
    pub fn to_dto(view: TableView) -> TableResponse {
        TableResponse {
            headers: view.headers,
            rows: view.rows,
        }
    }
}
