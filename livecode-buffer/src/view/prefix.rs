use crate::model::viewport::{ViewPort, LINE_NUMBER_WIDTH};

pub fn get_line_number(vp: &ViewPort, index: usize) -> String {
    if !vp.show_line_numbers {
        return "".to_string();
    }

    let width = LINE_NUMBER_WIDTH;
    let number: String = format!("{:<width$}", index).chars().take(width).collect();

    format!("{} ", number)
}
