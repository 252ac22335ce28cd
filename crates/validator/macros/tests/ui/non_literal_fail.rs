use fieldrules::Record;

#[allow(dead_code)]
#[derive(Record)]
struct Account {
    #[validate(3)]
    pub login: String,
}

fn main() {}
