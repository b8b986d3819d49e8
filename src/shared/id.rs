use uuid::Uuid;

/// Single id-generation strategy for both storage backends. Records born in
/// the JSON fallback and records born in Postgres carry interchangeable ids,
/// so a later import never collides on identifier shape.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
