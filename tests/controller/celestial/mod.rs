mod get_objects;
mod update_object;
