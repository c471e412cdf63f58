mod modals;
mod panels;
