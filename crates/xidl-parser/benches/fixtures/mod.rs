pub const SMALL_DOCUMENT: &str = include_str!("small_document.xidl");

/// Builds a synthetic document with `type_count` object types, each with a
/// mix of field shapes, plus an interface that uses all of them.
pub fn synthetic_document(type_count: usize) -> String {
    let mut source = String::from("namespace \"bench.synthetic\"\n\n");
    source.push_str("enum Status {\n  Active = 1 \"Active\"\n  Closed = 2 \"Closed\"\n}\n\n");
    for i in 0..type_count {
        source.push_str(&format!(
            "\"Record number {i}.\"\n\
             type Record{i} {{\n  \
               id: u64\n  \
               label?: string = \"record\" @max_len(64)\n  \
               status: Status = Active\n  \
               values: [f64]\n  \
               index: {{string: [u32?]}}\n\
             }}\n\n"
        ));
    }
    source.push_str("interface {\n");
    for i in 0..type_count {
        source.push_str(&format!("  get_record_{i}(id: u64): Record{i}?\n"));
    }
    source.push_str("}\n");
    source
}
