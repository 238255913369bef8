/// UI layer: sidebar inputs, tabular views, and chart panels.
pub mod panels;
pub mod plot;
pub mod table;
