pub mod dto;
pub mod handler;

pub use dto::TicketData;
pub use handler::refresh_ticket_data;
